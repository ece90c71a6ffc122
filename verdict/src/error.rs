//! The error capability shared by every error kind.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::metadata::{Metadata, MetadataValue};
use crate::registry::KindInfo;
use crate::render;

/// An error kind: a message plus metadata, identified by its kind name.
///
/// Implement it with `#[derive(ErrorKind)]` on a type wrapping an [`Error`]
/// (or another kind). `Display` renders the error for diagnostics.
pub trait ErrorKind: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Discriminator name of the kind, e.g. `"NotFoundError"`.
    fn kind_name(&self) -> &'static str;

    fn message(&self) -> &str;

    fn metadata(&self) -> &Metadata;

    fn as_any(&self) -> &dyn Any;

    fn into_shared(self) -> SharedError
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

/// Shared handle to an immutable error of any kind.
pub type SharedError = Arc<dyn ErrorKind>;

impl dyn ErrorKind {
    pub fn is<K: ErrorKind>(&self) -> bool {
        self.as_any().is::<K>()
    }

    pub fn downcast_ref<K: ErrorKind>(&self) -> Option<&K> {
        self.as_any().downcast_ref::<K>()
    }
}

/// The generic error: message and metadata, nothing else.
#[derive(Clone, Debug, Default)]
pub struct Error {
    message: String,
    metadata: Metadata,
}

inventory::submit!(KindInfo {
    name: "Error",
    module: module_path!(),
});

impl Error {
    /// Error with an empty message and no metadata.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::new(),
        }
    }

    /// Error carrying a single metadata entry.
    pub fn with_entry(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        Self {
            message: message.into(),
            metadata: Metadata::from_entry(key, value),
        }
    }

    /// Error carrying a copy of the given entries.
    pub fn with_metadata<I, K, V>(message: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        Self {
            message: message.into(),
            metadata: entries.into_iter().collect(),
        }
    }
}

impl ErrorKind for Error {
    fn kind_name(&self) -> &'static str {
        "Error"
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_error(self, f)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::NotFoundError;

    #[test]
    fn empty_error_has_no_message_or_metadata() {
        let error = Error::empty();
        assert_eq!(error.message(), "");
        assert!(error.metadata().is_empty());
        assert_eq!(error.to_string(), "Error");
    }

    #[test]
    fn single_entry_without_message() {
        let error = Error::with_entry("", "user_id", 42u64);
        assert_eq!(error.message(), "");
        assert_eq!(error.metadata().len(), 1);
        assert_eq!(*error.metadata().get::<u64>("user_id").unwrap(), 42);
    }

    #[test]
    fn metadata_map_is_copied() {
        let mut source: HashMap<String, MetadataValue> = HashMap::new();
        source.insert("table".to_string(), "users".into());

        let error = Error::with_metadata("lookup failed", &source);
        source.clear();
        source.insert("other".to_string(), 1i32.into());

        assert_eq!(error.metadata().len(), 1);
        assert_eq!(*error.metadata().get::<&str>("table").unwrap(), "users");
        assert!(!error.metadata().contains_key("other"));
    }

    #[test]
    fn renders_message() {
        assert_eq!(
            Error::new("disk full").to_string(),
            "Error { Message = \"disk full\" }"
        );
    }

    #[test]
    fn downcast_through_shared_handle() {
        let shared = NotFoundError::new("missing id 7").into_shared();

        assert!(shared.is::<NotFoundError>());
        assert!(!shared.is::<Error>());
        let found = shared
            .downcast_ref::<NotFoundError>()
            .expect("should downcast to the concrete kind");
        assert_eq!(found.message(), "missing id 7");
        assert_eq!(shared.kind_name(), "NotFoundError");
    }
}
