//! Error manipulations.

use std::{error, fmt};

/// Client configuration result.
pub type ClientResult<T> = Result<T, ClientError>;

/// Represents all possible configuration errors.
///
/// Construction of a [`ConsumerConfig`](crate::consumer::ConsumerConfig) or
/// [`ClientConfig`](crate::config::ClientConfig) only ever fails with
/// [`ClientError::InvalidArgument`]. The other variants are produced by the
/// string-keyed property interface.
#[derive(Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A constructor or setter argument broke an identity rule.
    InvalidArgument(String),
    /// The property name is not known to the configuration.
    UnknownProperty(String),
    /// The property value could not be parsed or is read-only.
    InvalidValue {
        /// Property name.
        key: String,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl fmt::Debug for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::InvalidArgument(msg) => {
                write!(f, "ClientError (Invalid argument: {})", msg)
            }
            ClientError::UnknownProperty(key) => {
                write!(f, "ClientError (Unknown property: {})", key)
            }
            ClientError::InvalidValue { key, value, reason } => write!(
                f,
                "ClientError (Invalid value: {} {} {})",
                key, value, reason
            ),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::InvalidArgument(msg) => write!(f, "Illegal parameter: {}", msg),
            ClientError::UnknownProperty(key) => write!(f, "Unknown property: {}", key),
            ClientError::InvalidValue { key, value, reason } => {
                write!(f, "Invalid value {:?} for {}: {}", value, key, reason)
            }
        }
    }
}

impl error::Error for ClientError {}

impl ClientError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> ClientError {
        ClientError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_value(
        key: &str,
        value: &str,
        reason: impl fmt::Display,
    ) -> ClientError {
        ClientError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the error comes from an identity rule rather than
    /// from the property interface.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClientError::InvalidArgument(_))
    }
}
