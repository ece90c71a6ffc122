//! Immutable key/value metadata attached to errors.
//!
//! Values are type-erased, so any `Send + Sync` type can be stored. The type
//! name is kept next to each value for typed lookups and diagnostics.

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{MetadataError, MetadataResult};

/// A single type-erased metadata value.
///
/// Cloning shares the underlying value.
#[derive(Clone)]
pub struct MetadataValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl MetadataValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the type the value was stored as.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MetadataValue").field(&self.type_name).finish()
    }
}

impl From<&MetadataValue> for MetadataValue {
    fn from(value: &MetadataValue) -> Self {
        value.clone()
    }
}

macro_rules! metadata_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::new(value)
                }
            }
        )*
    };
}

metadata_value_from!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);

/// Immutable string-keyed metadata map.
///
/// Built once from caller entries; the entries are copied on construction so
/// later changes to the caller's collection are never observed.
#[derive(Clone, Default)]
pub struct Metadata {
    entries: Arc<BTreeMap<String, MetadataValue>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata holding exactly one entry.
    pub fn from_entry(key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_value(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Typed lookup of a value.
    pub fn get<T: Any>(&self, key: &str) -> MetadataResult<&T> {
        let stored = self
            .entries
            .get(key)
            .ok_or_else(|| MetadataError::NotFound(key.to_string()))?;
        stored
            .downcast_ref::<T>()
            .ok_or_else(|| MetadataError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>().to_string(),
                found: stored.type_name().to_string(),
            })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>();
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
