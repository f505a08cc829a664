use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveFromCartCommand {
    cart_service: Box<dyn CartService>,
}

impl RemoveFromCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveFromCartCommandRequest {
    pub(crate) book_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveFromCartCommandResponse {
    pub total_items: u32,
    pub total_price: f64,
}

#[async_trait]
impl Command<RemoveFromCartCommandRequest, RemoveFromCartCommandResponse> for RemoveFromCartCommand {
    async fn execute(&self, req: RemoveFromCartCommandRequest) -> Result<RemoveFromCartCommandResponse, CommandError> {
        self.cart_service.remove_from_cart(req.book_id).await.map_err(CommandError::from)?;
        let total_items = self.cart_service.total_items().await.map_err(CommandError::from)?;
        let total_price = self.cart_service.total_price().await.map_err(CommandError::from)?;
        Ok(RemoveFromCartCommandResponse {
            total_items,
            total_price,
        })
    }
}
