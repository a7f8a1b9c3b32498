use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("record not found")]
    NotFound,

    #[error("write conflicted with a concurrent update")]
    ConcurrencyConflict,

    #[error("invalid sort specification: {0}")]
    InvalidSortSpec(String),

    #[error("invalid filter specification: {0}")]
    InvalidFilterSpec(String),

    #[error("invalid page specification: {0}")]
    InvalidPageSpec(String),

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("internal server error")]
    InternalServerError,
}
