//! Field-level wrappers for serde-encoded records
//!
//! This crate provides [`Codec`], a transparent wrapper that can be placed on a
//! single field of a `Serialize`/`Deserialize` record without changing how that
//! record compares, orders or hashes. Customization of the field (defaults,
//! renamed keys) stays with serde's own field attributes, so a wrapped record
//! and a plain record with the same shape are interchangeable both on the wire
//! and in hashed collections.
//!
//! # Main Types
//!
//! - [`Codec`] - The transparent field wrapper
//! - [`EquatableRecord`] - A record with one optional text field, declared through [`Codec`]
//! - [`StructuralRecord`] - Exposes a record's ordered field values for cross-type comparison
//! - [`Digester`] - Seeded, deterministic hash builder used for record digests
//!
//! # Usage
//!
//! ```rust
//! use codable_wrapper::{EquatableRecord, digest};
//!
//! #[derive(Hash)]
//! struct PlainModel {
//!     value1: Option<String>,
//! }
//!
//! let wrapped = EquatableRecord::from("abc");
//! let plain = PlainModel { value1: Some("abc".to_string()) };
//!
//! assert_eq!(wrapped.digest(), digest(&plain));
//! ```

pub mod codec;
pub mod config;
pub mod digest;
pub mod encoding;
pub mod logging;
pub mod record;

// Re-export commonly used types for easier access
pub use codec::Codec;
pub use config::{DigestConfig, EnvConfig};
pub use digest::{Digester, digest};
pub use encoding::{EncodingError, from_bytes, from_json, to_bytes, to_json};
pub use logging::{init_logging, init_test_logging};
pub use record::{EquatableRecord, StructuralRecord, structural_digest, structurally_equal};
