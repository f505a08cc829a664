use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use crate::cart::domain::model::CartItem;
use crate::cart::repository::CartRepository;
use crate::core::repository::StateRepository;
use crate::core::storefront::{StorefrontError, StorefrontResult};

const CART_SLOT: &str = "cart.json";

// Durable local persistence: one JSON document in a "cart" slot under the
// local data directory, written whole on every mutation.
#[derive(Debug)]
pub struct FileCartRepository {
    slot_path: PathBuf,
}

impl FileCartRepository {
    pub(crate) fn new(dir: &Path) -> Self {
        Self {
            slot_path: dir.join(CART_SLOT),
        }
    }
}

#[async_trait]
impl StateRepository<Vec<CartItem>> for FileCartRepository {
    async fn load(&self) -> StorefrontResult<Vec<CartItem>> {
        match fs::read_to_string(&self.slot_path).await {
            Ok(raw) => serde_json::from_str(raw.as_str()).map_err(StorefrontError::from),
            // nothing stored yet reads as an empty cart
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(err) => Err(StorefrontError::from(err)),
        }
    }

    async fn save(&self, state: &Vec<CartItem>) -> StorefrontResult<()> {
        if let Some(parent) = self.slot_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string(state)?;
        fs::write(&self.slot_path, raw).await.map_err(StorefrontError::from)
    }

    async fn clear(&self) -> StorefrontResult<()> {
        match fs::remove_file(&self.slot_path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorefrontError::from(err)),
        }
    }
}

impl CartRepository for FileCartRepository {}

#[cfg(test)]
mod tests {
    use crate::cart::domain::model::CartItem;
    use crate::cart::repository::file_cart_repository::FileCartRepository;
    use crate::core::repository::StateRepository;
    use crate::core::storefront::StorefrontError;

    #[tokio::test]
    async fn test_should_load_empty_when_nothing_stored() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = FileCartRepository::new(dir.path());
        assert!(repo.load().await.expect("should load slot").is_empty());
    }

    #[tokio::test]
    async fn test_should_round_trip_cart_state() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = FileCartRepository::new(dir.path());

        let items = vec![
            CartItem { book_id: 7, quantity: 2, price: 12.5 },
            CartItem { book_id: 8, quantity: 1, price: 3.0 },
        ];
        repo.save(&items).await.expect("should save cart");

        let loaded = repo.load().await.expect("should load cart");
        assert_eq!(items, loaded);
    }

    #[tokio::test]
    async fn test_should_clear_persisted_slot() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let repo = FileCartRepository::new(dir.path());

        repo.save(&vec![CartItem::new(7, 12.5)]).await.expect("should save cart");
        repo.clear().await.expect("should clear slot");

        assert!(!dir.path().join("cart.json").exists());
        assert!(repo.load().await.expect("should load slot").is_empty());

        // clearing an absent slot stays a no-op
        repo.clear().await.expect("should tolerate absent slot");
    }

    #[tokio::test]
    async fn test_should_report_corrupt_slot_as_serialization_error() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        std::fs::write(dir.path().join("cart.json"), "not json").expect("should write slot");

        let repo = FileCartRepository::new(dir.path());
        let res = repo.load().await;
        assert!(matches!(res, Err(StorefrontError::Serialization{ message: _ })));
    }
}
