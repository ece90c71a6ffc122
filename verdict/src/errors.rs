pub type VerdictResult<T> = std::result::Result<T, VerdictError>;
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error("a failed result needs at least one error")]
    EmptyErrors,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata key '{0}' not found")]
    NotFound(String),
    #[error("type mismatch for '{key}': expected '{expected}', found '{found}'")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },
}
