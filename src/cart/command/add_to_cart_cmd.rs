use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::cart::domain::model::CartItem;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddToCartCommand {
    cart_service: Box<dyn CartService>,
}

impl AddToCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddToCartCommandRequest {
    pub(crate) book_id: i64,
    pub(crate) price: f64,
}

impl AddToCartCommandRequest {
    pub fn new(book_id: i64, price: f64) -> Self {
        Self {
            book_id,
            price,
        }
    }

    pub fn build_item(&self) -> CartItem {
        CartItem::new(self.book_id, self.price)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddToCartCommandResponse {
    pub item: CartItem,
    pub total_items: u32,
    pub total_price: f64,
}

#[async_trait]
impl Command<AddToCartCommandRequest, AddToCartCommandResponse> for AddToCartCommand {
    async fn execute(&self, req: AddToCartCommandRequest) -> Result<AddToCartCommandResponse, CommandError> {
        let item = self.cart_service.add_to_cart(&req.build_item())
            .await.map_err(CommandError::from)?;
        let total_items = self.cart_service.total_items().await.map_err(CommandError::from)?;
        let total_price = self.cart_service.total_price().await.map_err(CommandError::from)?;
        Ok(AddToCartCommandResponse {
            item,
            total_items,
            total_price,
        })
    }
}
