use thiserror::Error;

/// Errors raised while locating or rebuilding state.
///
/// None of these are transient: each one means the caller handed over
/// malformed input, so they are returned as-is and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An action without metadata reached a reducer that needs a path.
    #[error("action meta is required to build path for reducers")]
    MissingMeta,

    /// Metadata carried neither a `storeAs` key nor a collection.
    #[error("collection is required to construct reducer path")]
    MissingCollection,

    /// A preserve setting was not a boolean, a list of field names or a function.
    #[error("invalid preserve setting: {found}")]
    InvalidPreserveSetting {
        /// JSON rendering of the rejected value.
        found: String,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
