use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use tracing::warn;
use crate::cart::domain::CartService;
use crate::cart::domain::model::CartItem;
use crate::cart::repository::CartRepository;
use crate::core::storefront::{StorefrontError, StorefrontResult};

pub(crate) struct CartServiceImpl {
    items: Mutex<Vec<CartItem>>,
    cart_repository: Box<dyn CartRepository>,
}

impl CartServiceImpl {
    // Rehydrates the cart from the repository; unreadable persisted state
    // fails closed to an empty cart instead of propagating.
    pub(crate) async fn load(cart_repository: Box<dyn CartRepository>) -> Self {
        let items = match cart_repository.load().await {
            Ok(items) => items,
            Err(err) => {
                warn!("discarding unreadable cart state: {}", err);
                vec![]
            }
        };
        Self {
            items: Mutex::new(items),
            cart_repository,
        }
    }

    fn locked(&self) -> StorefrontResult<MutexGuard<'_, Vec<CartItem>>> {
        self.items.lock().map_err(|_|
            StorefrontError::runtime("cart state lock poisoned", None))
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn add_to_cart(&self, item: &CartItem) -> StorefrontResult<CartItem> {
        // the guard must not be held across the persistence await
        let (merged, snapshot) = {
            let mut items = self.locked()?;
            let merged = match items.iter_mut().find(|c| c.book_id == item.book_id) {
                Some(existing) => {
                    existing.quantity += 1;
                    // last-write-wins, the catalog price may have moved since
                    existing.price = item.price;
                    existing.clone()
                }
                None => {
                    // a first insert always starts at quantity 1, whatever the
                    // incoming item claims
                    let entry = CartItem::new(item.book_id, item.price);
                    items.push(entry.clone());
                    entry
                }
            };
            (merged, items.clone())
        };
        self.cart_repository.save(&snapshot).await?;
        Ok(merged)
    }

    async fn remove_from_cart(&self, book_id: i64) -> StorefrontResult<()> {
        let snapshot = {
            let mut items = self.locked()?;
            items.retain(|c| c.book_id != book_id);
            items.clone()
        };
        self.cart_repository.save(&snapshot).await
    }

    async fn clear_cart(&self) -> StorefrontResult<()> {
        {
            self.locked()?.clear();
        }
        self.cart_repository.clear().await
    }

    async fn cart(&self) -> StorefrontResult<Vec<CartItem>> {
        Ok(self.locked()?.clone())
    }

    async fn total_items(&self) -> StorefrontResult<u32> {
        Ok(self.locked()?.iter().map(|c| c.quantity).sum())
    }

    async fn total_price(&self) -> StorefrontResult<f64> {
        Ok(self.locked()?.iter().map(CartItem::subtotal).sum())
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::domain::CartService;
    use crate::cart::domain::model::CartItem;
    use crate::cart::domain::service::CartServiceImpl;
    use crate::cart::repository::file_cart_repository::FileCartRepository;
    use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
    use crate::core::repository::StateRepository;

    async fn build_service(repo: MemoryCartRepository) -> CartServiceImpl {
        CartServiceImpl::load(Box::new(repo)).await
    }

    #[tokio::test]
    async fn test_should_merge_repeat_adds_by_identity() {
        let svc = build_service(MemoryCartRepository::new()).await;

        let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        let merged = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        assert_eq!(2, merged.quantity);

        let items = svc.cart().await.expect("should read cart");
        assert_eq!(vec![CartItem { book_id: 7, quantity: 2, price: 12.5 }], items);
        assert_eq!(2, svc.total_items().await.expect("should total items"));
        assert_eq!(25.0, svc.total_price().await.expect("should total price"));
    }

    #[tokio::test]
    async fn test_should_overwrite_price_on_repeat_add() {
        let svc = build_service(MemoryCartRepository::new()).await;

        let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        let merged = svc.add_to_cart(&CartItem::new(7, 15.0)).await.expect("should add item");
        assert_eq!(15.0, merged.price);
        assert_eq!(30.0, svc.total_price().await.expect("should total price"));
    }

    #[tokio::test]
    async fn test_should_ignore_incoming_quantity_on_first_insert() {
        let svc = build_service(MemoryCartRepository::new()).await;

        let inflated = CartItem { book_id: 3, quantity: 9, price: 5.0 };
        let added = svc.add_to_cart(&inflated).await.expect("should add item");
        assert_eq!(1, added.quantity);
    }

    #[tokio::test]
    async fn test_should_ignore_remove_of_absent_item() {
        let svc = build_service(MemoryCartRepository::new()).await;

        let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        let _ = svc.remove_from_cart(99).await.expect("should tolerate absent id");

        let items = svc.cart().await.expect("should read cart");
        assert_eq!(1, items.len());
    }

    #[tokio::test]
    async fn test_should_remove_item() {
        let svc = build_service(MemoryCartRepository::new()).await;

        let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        let _ = svc.add_to_cart(&CartItem::new(8, 3.0)).await.expect("should add item");
        let _ = svc.remove_from_cart(7).await.expect("should remove item");

        let items = svc.cart().await.expect("should read cart");
        assert_eq!(vec![CartItem::new(8, 3.0)], items);
    }

    #[tokio::test]
    async fn test_should_clear_cart_and_persisted_copy() {
        let repo = MemoryCartRepository::new();
        let svc = build_service(repo.clone()).await;

        let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        let _ = svc.clear_cart().await.expect("should clear cart");

        assert!(svc.cart().await.expect("should read cart").is_empty());
        assert_eq!(0, svc.total_items().await.expect("should total items"));
        assert!(repo.load().await.expect("should load slot").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_closed_on_corrupt_persisted_cart() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        std::fs::write(dir.path().join("cart.json"), "not json").expect("should write slot");

        let svc = CartServiceImpl::load(
            Box::new(FileCartRepository::new(dir.path()))).await;
        assert!(svc.cart().await.expect("should read cart").is_empty());
    }

    #[tokio::test]
    async fn test_should_reload_persisted_cart() {
        let repo = MemoryCartRepository::new();
        {
            let svc = build_service(repo.clone()).await;
            let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
            let _ = svc.add_to_cart(&CartItem::new(8, 3.0)).await.expect("should add item");
            let _ = svc.add_to_cart(&CartItem::new(7, 12.5)).await.expect("should add item");
        }

        let reloaded = build_service(repo).await;
        let items = reloaded.cart().await.expect("should read cart");
        assert_eq!(vec![
            CartItem { book_id: 7, quantity: 2, price: 12.5 },
            CartItem { book_id: 8, quantity: 1, price: 3.0 },
        ], items);
        assert_eq!(3, reloaded.total_items().await.expect("should total items"));
    }
}
