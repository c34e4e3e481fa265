/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3100). Env var: `API_PORT`.
    pub api_port: u16,
    /// Public base URL used to mint upload URLs and resolve stored image
    /// references (default `http://localhost:3100`). Env var: `PUBLIC_BASE_URL`.
    pub public_base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let api_port = std::env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3100);
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{api_port}")),
        }
    }
}
