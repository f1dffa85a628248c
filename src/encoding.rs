//! JSON and binary encoding helpers
//!
//! Thin helpers over `serde_json` and bincode's serde bridge. They exist so
//! wrapped and plain records can be checked for identical encoded output; no
//! format logic lives here.

use bincode::config::{Configuration, standard};
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("JSON encode error: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error("JSON decode error: {0}")]
    JsonDecode(#[source] serde_json::Error),
    #[error("Binary encode error: {0}")]
    BinaryEncode(#[from] bincode::error::EncodeError),
    #[error("Binary decode error: {0}")]
    BinaryDecode(#[from] bincode::error::DecodeError),
    #[error("Trailing bytes after binary value: {remaining}")]
    TrailingBytes { remaining: usize },
}

fn binary_config() -> Configuration {
    standard()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodingError> {
    let json = serde_json::to_string(value).map_err(EncodingError::JsonEncode)?;
    log::debug!("Encoded {} bytes of JSON", json.len());
    Ok(json)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, EncodingError> {
    log::debug!("Decoding {} bytes of JSON", json.len());
    serde_json::from_str(json).map_err(EncodingError::JsonDecode)
}

pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodingError> {
    let bytes = bincode::serde::encode_to_vec(value, binary_config())?;
    log::debug!("Encoded {} binary bytes", bytes.len());
    Ok(bytes)
}

/// Decode a value from its binary encoding
///
/// The slice must hold exactly one value; leftover bytes are reported as
/// [`EncodingError::TrailingBytes`].
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, EncodingError> {
    let (value, read) = bincode::serde::decode_from_slice::<T, _>(bytes, binary_config())?;
    log::debug!("Decoded {read} of {} binary bytes", bytes.len());
    if read != bytes.len() {
        return Err(EncodingError::TrailingBytes {
            remaining: bytes.len() - read,
        });
    }
    Ok(value)
}
