//! Built-in error kinds.

use std::fmt;
use std::panic::Location;

use crate::render::short_type_name;
use crate::{Error, ErrorKind};

/// A value could not be deserialized into the named type.
#[derive(Clone, Debug, ErrorKind)]
pub struct DeserializationError(Error);

impl DeserializationError {
    pub fn of<T: ?Sized>() -> Self {
        Self::named(short_type_name::<T>())
    }

    pub fn named(type_name: impl fmt::Display) -> Self {
        Self(Error::new(format!("Failed to deserialize into {type_name}")))
    }
}

/// A value of the named type could not be serialized.
#[derive(Clone, Debug, ErrorKind)]
pub struct SerializationError(Error);

impl SerializationError {
    pub fn of<T: ?Sized>() -> Self {
        Self::named(short_type_name::<T>())
    }

    pub fn named(type_name: impl fmt::Display) -> Self {
        Self(Error::new(format!("Failed to serialize {type_name}")))
    }
}

/// A call to an external service failed.
#[derive(Clone, Debug, ErrorKind)]
pub struct ExternalServiceError(Error);

impl ExternalServiceError {
    pub fn new(service_name: impl fmt::Display) -> Self {
        Self(Error::new(format!(
            "An error occurred while using external service: {service_name}"
        )))
    }

    /// Uses `message` as is; the service name is not included.
    pub fn with_message(_service_name: impl fmt::Display, message: impl Into<String>) -> Self {
        Self(Error::new(message))
    }
}

/// The requested item does not exist. The message may be empty.
#[derive(Clone, Debug, Default, ErrorKind)]
pub struct NotFoundError(Error);

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(Error::new(message))
    }
}

/// The operation was canceled; the message names where.
#[derive(Clone, Debug, ErrorKind)]
pub struct OperationCanceledError(Error);

impl OperationCanceledError {
    /// Records the caller's `file:line` as the origin.
    #[track_caller]
    pub fn new() -> Self {
        let caller = Location::caller();
        Self::at(format_args!("{}:{}", caller.file(), caller.line()))
    }

    /// Uses an explicit origin, e.g. `"sync_users:42"`.
    pub fn at(origin: impl fmt::Display) -> Self {
        Self(Error::new(format!("Operation was canceled. Origin: {origin}")))
    }
}
