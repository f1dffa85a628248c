//! Value-semantics records and structural comparison
//!
//! Equality and hashing of a record are defined by its field values in
//! declaration order, never by the declaring type. [`StructuralRecord`] makes
//! that ordered sequence explicit as a tuple `Shape`, so two nominally
//! distinct record types can be compared when their shapes match.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{codec::Codec, digest::Digester};

/// A record whose equality and hash are determined by its ordered fields
///
/// `Shape` is a tuple of the field values in declaration order. For a record
/// with derived `Hash`, digesting the record and digesting its shape give the
/// same result.
pub trait StructuralRecord {
    type Shape: Hash + Eq;

    fn shape(&self) -> Self::Shape;
}

/// Compare two records of possibly different types by their field values
///
/// Only records with the same shape type can be compared; differing field
/// counts, order or types are rejected at compile time.
pub fn structurally_equal<A, B>(a: &A, b: &B) -> bool
where
    A: StructuralRecord,
    B: StructuralRecord<Shape = A::Shape>,
{
    a.shape() == b.shape()
}

/// Digest of a record's shape
pub fn structural_digest<R: StructuralRecord>(record: &R, digester: &Digester) -> u64 {
    digester.digest(&record.shape())
}

/// Record with a single optional text field declared through [`Codec`]
///
/// Hashes and compares exactly like any plain struct holding one
/// `Option<String>` field. A missing `value1` key decodes to `None`.
///
/// # Example
///
/// ```rust
/// use codable_wrapper::{EquatableRecord, digest};
///
/// #[derive(Hash)]
/// struct NativeModel {
///     value1: Option<String>,
/// }
///
/// let a = EquatableRecord::from("abc");
/// let b = EquatableRecord::new(Some("abc".to_string()));
/// let c = NativeModel { value1: Some("abc".to_string()) };
///
/// assert_eq!(a, b);
/// assert_eq!(a.digest(), digest(&c));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquatableRecord {
    #[serde(default)]
    pub value1: Codec<Option<String>>,
}

impl EquatableRecord {
    pub fn new(value1: Option<String>) -> Self {
        Self {
            value1: Codec::new(value1),
        }
    }

    pub fn value1(&self) -> Option<&str> {
        self.value1.as_deref()
    }

    /// Digest with the default seed
    pub fn digest(&self) -> u64 {
        self.digest_with(&Digester::default())
    }

    pub fn digest_with(&self, digester: &Digester) -> u64 {
        digester.digest(self)
    }
}

impl From<Option<String>> for EquatableRecord {
    fn from(value1: Option<String>) -> Self {
        Self::new(value1)
    }
}

impl From<String> for EquatableRecord {
    fn from(value1: String) -> Self {
        Self::new(Some(value1))
    }
}

impl From<&str> for EquatableRecord {
    fn from(value1: &str) -> Self {
        Self::new(Some(value1.to_string()))
    }
}

impl StructuralRecord for EquatableRecord {
    type Shape = (Option<String>,);

    fn shape(&self) -> Self::Shape {
        ((*self.value1).clone(),)
    }
}
