pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::cart::domain::model::CartItem;
use crate::core::storefront::StorefrontResult;

#[async_trait]
pub(crate) trait CartService: Sync + Send {
    // merge-by-identity: an existing entry gains quantity and takes the
    // incoming price; a new entry starts at quantity 1
    async fn add_to_cart(&self, item: &CartItem) -> StorefrontResult<CartItem>;

    // no-op when the identifier is not in the cart
    async fn remove_from_cart(&self, book_id: i64) -> StorefrontResult<()>;

    // empties the collection and the persisted copy
    async fn clear_cart(&self) -> StorefrontResult<()>;

    async fn cart(&self) -> StorefrontResult<Vec<CartItem>>;

    async fn total_items(&self) -> StorefrontResult<u32>;

    async fn total_price(&self) -> StorefrontResult<f64>;
}
