//! Diagnostic text for errors and results.
//!
//! The output is meant for logs and assertions. It is not parseable back into
//! a value.

use std::any::{type_name, Any};
use std::fmt;

use crate::error::ErrorKind;

/// Writes `Kind` for an empty message, `Kind { Message = "..." }` otherwise.
pub fn fmt_error(error: &dyn ErrorKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let message = error.message();
    if message.is_empty() {
        return f.write_str(error.kind_name());
    }
    write!(f, "{} {{ Message = \"{}\" }}", error.kind_name(), message)
}

macro_rules! plain_value {
    ($value:expr; $($ty:ty),* $(,)?) => {
        $(
            if let Some(v) = $value.downcast_ref::<$ty>() {
                return Some(v.to_string());
            }
        )*
    };
}

/// Text of a success value, or `None` when its type has no rendering rule.
///
/// Numbers print with Rust's locale-independent `Display` (plain decimal
/// floats, `inf`/`NaN` for non-finite values), booleans as
/// `True`/`False`, characters single-quoted and strings double-quoted.
pub fn value_text(value: &dyn Any) -> Option<String> {
    plain_value!(value;
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

    if let Some(b) = value.downcast_ref::<bool>() {
        return Some(if *b { "True" } else { "False" }.to_string());
    }
    if let Some(c) = value.downcast_ref::<char>() {
        return Some(format!("'{c}'"));
    }
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(format!("\"{s}\""));
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Some(format!("\"{s}\""));
    }
    None
}

/// Type name of `T` with module paths stripped, e.g. `Vec<u8>` for
/// `alloc::vec::Vec<u8>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
            continue;
        }
        out.push_str(last_segment(&path));
        path.clear();
        out.push(ch);
    }
    out.push_str(last_segment(&path));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
