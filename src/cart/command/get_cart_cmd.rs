use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::cart::domain::model::CartItem;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetCartCommand {
    cart_service: Box<dyn CartService>,
}

impl GetCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetCartCommandRequest {
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCartCommandResponse {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: f64,
}

#[async_trait]
impl Command<GetCartCommandRequest, GetCartCommandResponse> for GetCartCommand {
    async fn execute(&self, _req: GetCartCommandRequest) -> Result<GetCartCommandResponse, CommandError> {
        let items = self.cart_service.cart().await.map_err(CommandError::from)?;
        let total_items = self.cart_service.total_items().await.map_err(CommandError::from)?;
        let total_price = self.cart_service.total_price().await.map_err(CommandError::from)?;
        Ok(GetCartCommandResponse {
            items,
            total_items,
            total_price,
        })
    }
}
