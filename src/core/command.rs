use async_trait::async_trait;
use crate::core::storefront::StorefrontError;

#[derive(Debug)]
pub enum CommandError {
    Network {
        message: String,
        reason_code: Option<String>,
    },
    Api {
        message: String,
        status_code: Option<u16>,
    },
    Storage {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<StorefrontError> for CommandError {
    fn from(other: StorefrontError) -> Self {
        match other {
            StorefrontError::Network { message, reason_code } => {
                CommandError::Network { message, reason_code }
            }
            StorefrontError::Api { message, status_code } => {
                CommandError::Api { message, status_code }
            }
            StorefrontError::Storage { message } => {
                CommandError::Storage { message }
            }
            StorefrontError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            StorefrontError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            StorefrontError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
