use axum::http::StatusCode;

/// Handler for `GET /healthz`, liveness only.
///
/// Readiness (`/readyz`) lives in the service, where the database handle is.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthz_returns_200() {
        assert_eq!(healthz().await, StatusCode::OK);
    }
}
