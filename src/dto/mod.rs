use serde::{Deserialize, Serialize};

pub mod hotspots;

/// Uniform `{success, data?, error?}` wrapper returned by every resource
/// API operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope carrying only a user-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty success payload, serialized as `{}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Empty {}
