use alloc::string::String;

use thiserror::Error;

/// Errors raised while configuring a [`Scope`](crate::Scope).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Both `only` and `except` were supplied.
    #[error("`only` and `except` are mutually exclusive")]
    ConflictingFilters,

    /// The same name was given more than one initial value.
    #[error("`{0}` is bound more than once")]
    DuplicateBinding(String),
}

/// Result type of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
