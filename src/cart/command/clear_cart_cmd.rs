use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ClearCartCommand {
    cart_service: Box<dyn CartService>,
}

impl ClearCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClearCartCommandRequest {
}

#[derive(Debug, Serialize)]
pub(crate) struct ClearCartCommandResponse {
    pub total_items: u32,
}

#[async_trait]
impl Command<ClearCartCommandRequest, ClearCartCommandResponse> for ClearCartCommand {
    async fn execute(&self, _req: ClearCartCommandRequest) -> Result<ClearCartCommandResponse, CommandError> {
        self.cart_service.clear_cart().await.map_err(CommandError::from)?;
        let total_items = self.cart_service.total_items().await.map_err(CommandError::from)?;
        Ok(ClearCartCommandResponse {
            total_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::cart::command::clear_cart_cmd::{ClearCartCommand, ClearCartCommandRequest};
    use crate::cart::domain::model::CartItem;
    use crate::cart::domain::service::CartServiceImpl;
    use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
    use crate::core::command::Command;
    use crate::core::repository::StateRepository;

    #[tokio::test]
    async fn test_should_run_clear_cart() {
        let repo = MemoryCartRepository::new();
        repo.save(&vec![CartItem::new(7, 12.5)]).await.expect("should seed cart");
        let svc = CartServiceImpl::load(Box::new(repo.clone())).await;
        let cmd = ClearCartCommand::new(Box::new(svc));

        let res = cmd.execute(ClearCartCommandRequest {}).await.expect("should clear cart");
        assert_eq!(0, res.total_items);
        assert!(repo.load().await.expect("should load slot").is_empty());
    }
}
