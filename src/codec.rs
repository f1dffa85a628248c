use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

/// Transparent wrapper for a single record field
///
/// `Codec<T>` marks a field as carrying codec customization while keeping the
/// field's value semantics identical to a bare `T`:
///
/// - serializes and deserializes exactly as `T` does
/// - compares, orders and hashes exactly as `T` does
/// - formats with `T`'s `Debug` and `Display`
///
/// Defaults and renamed keys are declared with serde's field attributes next
/// to the wrapper. A wrapped `Option` field needs `#[serde(default)]` to decode
/// from input where the key is missing, because serde only treats a bare
/// `Option` field as implicitly optional.
///
/// # Example
///
/// ```rust
/// use codable_wrapper::Codec;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Article {
///     #[serde(default, rename = "headline")]
///     title: Codec<Option<String>>,
/// }
///
/// let article: Article = serde_json::from_str("{}").unwrap();
/// assert_eq!(*article.title, None);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codec<T>(T);

impl<T> Codec<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Codec<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Codec<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Codec<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Codec<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
