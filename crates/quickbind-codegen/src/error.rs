//! Generator error types.

use thiserror::Error;

/// Errors that can occur while generating a binding unit.
///
/// Classification failures never appear here — unknown types fall back to
/// the object-reference path and any resulting breakage is deferred to the
/// downstream C++ compiler.
#[derive(Debug, Error)]
pub enum GenError {
    /// The class-description document has no class name.
    #[error("class metadata has an empty name")]
    EmptyClassName,

    /// The class-description document has no include path.
    #[error("class `{0}` has an empty include path")]
    EmptyIncludePath(String),
}

/// Generator result type alias.
pub type GenResult<T> = Result<T, GenError>;
