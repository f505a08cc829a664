use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::fs::data_dir;

const DEFAULT_CATALOG_URL: &str = "https://localhost:5000";

// Configuration abstracts config options for the storefront client
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub catalog_base_url: String,
    pub cart_dir: PathBuf,
    pub default_page_size: u32,
}

impl Configuration {
    pub fn new(catalog_base_url: &str, cart_dir: &Path) -> Self {
        Configuration {
            catalog_base_url: catalog_base_url.to_string(),
            cart_dir: cart_dir.to_path_buf(),
            default_page_size: 5,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("BOOKSTORE_API_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        Configuration::new(base_url.as_str(), data_dir().as_path())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("https://localhost:5000", Path::new("/tmp/cart"));
        assert_eq!("https://localhost:5000", config.catalog_base_url.as_str());
        assert_eq!(Path::new("/tmp/cart"), config.cart_dir.as_path());
        assert_eq!(5, config.default_page_size);
    }
}
