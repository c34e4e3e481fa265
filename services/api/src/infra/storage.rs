use uuid::Uuid;

use crate::domain::repository::StoragePort;

/// Storage port backed by a public base URL. Upload mechanics live behind
/// that URL; this side only mints references and resolves them.
#[derive(Clone)]
pub struct BaseUrlStorage {
    pub base_url: String,
}

impl StoragePort for BaseUrlStorage {
    fn new_upload_url(&self) -> String {
        format!("{}/uploads/{}", self.base_url, Uuid::new_v4())
    }

    fn serving_url(&self, image: &str) -> String {
        // References that are already absolute URLs pass through untouched.
        if image.starts_with("http") {
            image.to_owned()
        } else {
            format!("{}/files/{}", self.base_url, image)
        }
    }
}
