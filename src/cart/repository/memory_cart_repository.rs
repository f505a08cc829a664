use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::cart::domain::model::CartItem;
use crate::cart::repository::CartRepository;
use crate::core::repository::StateRepository;
use crate::core::storefront::{StorefrontError, StorefrontResult};

// Stand-in for durable local storage; clones share one slot so a reload
// against the same handle sees earlier writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartRepository {
    slot: Arc<Mutex<Option<Vec<CartItem>>>>,
}

impl MemoryCartRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> StorefrontResult<std::sync::MutexGuard<'_, Option<Vec<CartItem>>>> {
        self.slot.lock().map_err(|_|
            StorefrontError::runtime("cart slot lock poisoned", None))
    }
}

#[async_trait]
impl StateRepository<Vec<CartItem>> for MemoryCartRepository {
    async fn load(&self) -> StorefrontResult<Vec<CartItem>> {
        Ok(self.locked()?.clone().unwrap_or_default())
    }

    async fn save(&self, state: &Vec<CartItem>) -> StorefrontResult<()> {
        *self.locked()? = Some(state.clone());
        Ok(())
    }

    async fn clear(&self) -> StorefrontResult<()> {
        *self.locked()? = None;
        Ok(())
    }
}

impl CartRepository for MemoryCartRepository {}

#[cfg(test)]
mod tests {
    use crate::cart::domain::model::CartItem;
    use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
    use crate::core::repository::StateRepository;

    #[tokio::test]
    async fn test_should_share_slot_between_clones() {
        let repo = MemoryCartRepository::new();
        let other = repo.clone();

        repo.save(&vec![CartItem::new(7, 12.5)]).await.expect("should save cart");
        assert_eq!(1, other.load().await.expect("should load cart").len());

        other.clear().await.expect("should clear cart");
        assert!(repo.load().await.expect("should load cart").is_empty());
    }
}
