//! Verdict - success-or-errors results without control-flow panics.
//!
//! A [`Result<T>`] holds either one value or one or more errors. Errors are
//! immutable values carrying a message and key/value [`Metadata`], and each
//! error belongs to a kind ([`ErrorKind`]) that can be queried with
//! [`Result::has_error`].
//!
//! # Declaring kinds
//!
//! New kinds wrap an [`Error`] and derive `ErrorKind`:
//!
//! ```ignore
//! #[derive(Debug, Clone, ErrorKind)]
//! pub struct QuotaExceededError(Error);
//! ```
//!
//! Misuse, such as reading the value of a failed result, panics. Expected
//! failures always travel as failed results.

extern crate self as verdict;

pub mod error;
pub mod errors;
pub mod kinds;
mod macros;
pub mod metadata;
pub mod registry;
pub mod render;
pub mod result;

pub use error::{Error, ErrorKind, SharedError};
pub use errors::{MetadataError, MetadataResult, VerdictError, VerdictResult};
pub use inventory;
pub use kinds::{
    DeserializationError, ExternalServiceError, NotFoundError, OperationCanceledError,
    SerializationError,
};
pub use metadata::{Metadata, MetadataValue};
pub use registry::KindInfo;
pub use result::Result;
pub use verdict_macros::ErrorKind;
