//! Success-or-errors result values.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::{Error, ErrorKind, SharedError};
use crate::errors::{VerdictError, VerdictResult};
use crate::metadata::MetadataValue;
use crate::render;

static EMPTY_ERROR: LazyLock<SharedError> = LazyLock::new(|| Error::empty().into_shared());

/// The outcome of an operation: one value, or one or more errors.
///
/// Built only through the factory functions and immutable afterwards.
/// `Display` gives a diagnostic rendering such as
/// `Result { IsSuccess = True, Value = 42 }`.
///
/// Plain values convert into a success with `into()`:
///
/// ```
/// use verdict::Result;
///
/// let result: Result<u32> = 7u32.into();
/// assert!(result.is_success());
/// ```
///
/// Errors and results do not:
///
/// ```compile_fail
/// use verdict::{Error, Result};
///
/// let result: Result<Error> = Error::new("x").into();
/// ```
///
/// ```compile_fail
/// use verdict::Result;
///
/// let nested: Result<Result<i32>> = Result::<i32>::fail_with("inner").into();
/// ```
#[derive(Clone, Debug)]
pub struct Result<T> {
    state: State<T>,
}

#[derive(Clone, Debug)]
enum State<T> {
    Success(T),
    // Never empty.
    Failure(Vec<SharedError>),
}

#[cold]
#[track_caller]
fn misuse(message: &'static str) -> ! {
    tracing::error!(%message, "result accessed in the wrong state");
    panic!("{message}")
}

impl<T> Result<T> {
    pub fn ok(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Failed result holding the shared empty error.
    pub fn fail() -> Self {
        Self::failure(vec![Arc::clone(&EMPTY_ERROR)])
    }

    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::fail_error(Error::new(message))
    }

    pub fn fail_with_entry(
        message: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        Self::fail_error(Error::with_entry(message, key, value))
    }

    pub fn fail_with_metadata<I, K, V>(message: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        Self::fail_error(Error::with_metadata(message, entries))
    }

    pub fn fail_error<E: ErrorKind>(error: E) -> Self {
        Self::fail_shared(error.into_shared())
    }

    pub fn fail_shared(error: SharedError) -> Self {
        Self::failure(vec![error])
    }

    /// Failed result holding `errors` in order.
    ///
    /// An empty sequence is rejected: a result without errors would be a
    /// success without a value.
    pub fn fail_all(errors: impl IntoIterator<Item = SharedError>) -> VerdictResult<Self> {
        let errors: Vec<_> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(VerdictError::EmptyErrors);
        }
        Ok(Self::failure(errors))
    }

    fn failure(errors: Vec<SharedError>) -> Self {
        Self {
            state: State::Failure(errors),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn is_failed(&self) -> bool {
        !self.is_success()
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is failed.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(_) => misuse("Result is failed. Value is not set."),
        }
    }

    /// Consumes the result and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is failed.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => misuse("Result is failed. Value is not set."),
        }
    }

    pub fn try_value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// All errors in order; empty for a success.
    pub fn errors(&self) -> &[SharedError] {
        match &self.state {
            State::Success(_) => &[],
            State::Failure(errors) => errors,
        }
    }

    /// The first error.
    ///
    /// # Panics
    ///
    /// Panics if the result is successful.
    #[track_caller]
    pub fn error(&self) -> &SharedError {
        match &self.state {
            State::Success(_) => misuse("Result is successful. Error is not set."),
            State::Failure(errors) => &errors[0],
        }
    }

    /// Whether any error is of kind `K`.
    pub fn has_error<K: ErrorKind>(&self) -> bool {
        self.errors().iter().any(|e| e.is::<K>())
    }

    /// The first error of kind `K`, if any.
    pub fn find_error<K: ErrorKind>(&self) -> Option<&K> {
        self.errors().iter().find_map(|e| e.downcast_ref::<K>())
    }

    pub fn into_std(self) -> std::result::Result<T, Vec<SharedError>> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(errors) => Err(errors),
        }
    }
}

// Success conversion is limited to plain value types so an error kind or a
// `Result` can never turn into a success through `into()`.
macro_rules! success_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Result<$ty> {
                fn from(value: $ty) -> Self {
                    Self::ok(value)
                }
            }
        )*
    };
}

success_from!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str, Box<str>,
);

impl<T> From<Vec<T>> for Result<Vec<T>> {
    fn from(value: Vec<T>) -> Self {
        Self::ok(value)
    }
}

impl<T> From<Option<T>> for Result<Option<T>> {
    fn from(value: Option<T>) -> Self {
        Self::ok(value)
    }
}

impl<T> From<Result<T>> for std::result::Result<T, Vec<SharedError>> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<T: Any> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => {
                f.write_str("Result { IsSuccess = True")?;
                if let Some(text) = render::value_text(value) {
                    write!(f, ", Value = {text}")?;
                }
                f.write_str(" }")
            }
            State::Failure(errors) => {
                let message = errors[0].message();
                if message.is_empty() {
                    return f.write_str("Result { IsSuccess = False }");
                }
                write!(f, "Result {{ IsSuccess = False, Error = \"{message}\" }}")
            }
        }
    }
}


// proptest's macros must not see this crate's `Result` in scope.
#[cfg(test)]
mod properties {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::{Error, ErrorKind, SharedError};

    type Outcome<T> = crate::Result<T>;

    proptest! {
        #[test]
        fn ok_holds_its_value(v in any::<i64>()) {
            let result = Outcome::ok(v);
            prop_assert!(result.is_success());
            prop_assert!(!result.is_failed());
            prop_assert_eq!(*result.value(), v);
            prop_assert!(result.errors().is_empty());
        }

        #[test]
        fn fail_all_keeps_every_error(messages in prop::collection::vec(".*", 1..8)) {
            let errors: Vec<SharedError> = messages
                .iter()
                .map(|m| Error::new(m.clone()).into_shared())
                .collect();
            let result = Outcome::<i64>::fail_all(errors.clone()).unwrap();

            prop_assert!(result.is_failed());
            prop_assert!(!result.is_success());
            prop_assert_eq!(result.errors().len(), errors.len());
            for (stored, original) in result.errors().iter().zip(&errors) {
                prop_assert!(Arc::ptr_eq(stored, original));
            }
        }

        #[test]
        fn ok_rendering_matches_display(v in any::<u32>()) {
            prop_assert_eq!(
                Outcome::ok(v).to_string(),
                format!("Result {{ IsSuccess = True, Value = {v} }}")
            );
        }
    }
}
