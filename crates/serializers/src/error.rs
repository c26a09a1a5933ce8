//! Serializer errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializeError {
    #[error("Unknown format: {0} (expected html, xml or json)")]
    UnknownFormat(String),
}
