/// Build a failed `Result` from a formatted message.
///
/// ```ignore
/// return fail!("user {} not found", id);
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        $crate::Result::fail_with(::std::format!($($arg)+))
    };
}

/// Build an `OperationCanceledError` whose origin is the enclosing function
/// and the current line, e.g. `"sync_users:42"`.
///
/// ```ignore
/// if token.is_cancelled() {
///     return Result::fail_error(canceled!());
/// }
/// ```
#[macro_export]
macro_rules! canceled {
    () => {{
        fn __origin() {}
        let path = ::std::any::type_name_of_val(&__origin);
        let path = path.strip_suffix("::__origin").unwrap_or(path);
        let function = path.rsplit("::").next().unwrap_or(path);
        $crate::OperationCanceledError::at(::std::format_args!(
            "{}:{}",
            function,
            ::std::line!()
        ))
    }};
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, OperationCanceledError, Result};

    fn lookup(id: u32) -> Result<u32> {
        if id == 0 {
            return fail!("user {} not found", id);
        }
        Result::ok(id)
    }

    #[test]
    fn fail_formats_message() {
        let result = lookup(0);
        assert_eq!(result.error().message(), "user 0 not found");
        assert_eq!(*lookup(3).value(), 3);
    }

    #[test]
    fn canceled_names_enclosing_function() {
        let line = line!() + 1;
        let error: OperationCanceledError = canceled!();
        assert_eq!(
            error.message(),
            format!("Operation was canceled. Origin: canceled_names_enclosing_function:{line}")
        );
    }
}
