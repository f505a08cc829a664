use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum StorefrontError {
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

impl StorefrontError {
    pub fn network(message: &str, reason_code: Option<String>) -> StorefrontError {
        StorefrontError::Network { message: message.to_string(), reason_code }
    }

    pub fn api(message: &str, status_code: Option<u16>) -> StorefrontError {
        StorefrontError::Api { message: message.to_string(), status_code }
    }

    pub fn storage(message: &str) -> StorefrontError {
        StorefrontError::Storage { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> StorefrontError {
        StorefrontError::Serialization { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> StorefrontError {
        StorefrontError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> StorefrontError {
        StorefrontError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::storage(
            format!("local storage io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorefrontError::serialization(
                format!("catalog body decode {:?}", err).as_str())
        } else if let Some(status) = err.status() {
            StorefrontError::api(
                format!("catalog response {:?}", err).as_str(), Some(status.as_u16()))
        } else {
            StorefrontError::network(
                format!("catalog transport {:?}", err).as_str(), None)
        }
    }
}

impl Display for StorefrontError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontError::Network { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            StorefrontError::Api { message, status_code } => {
                write!(f, "{} {:?}", message, status_code)
            }
            StorefrontError::Storage { message } => {
                write!(f, "{}", message)
            }
            StorefrontError::Serialization { message } => {
                write!(f, "{}", message)
            }
            StorefrontError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            StorefrontError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

// Sort order for catalog browsing, by title on the server side.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortOrder {
    Asc,
    Desc,
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        match s.as_str() {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

// The catalog service only serves these page sizes.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum PageSize {
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub fn count(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = StorefrontError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            other => Err(StorefrontError::validation(
                format!("unsupported page size {}", other).as_str(), None)),
        }
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}
