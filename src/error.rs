// src/error.rs

use thiserror::Error;

/// Result alias for every fallible toolkit operation.
pub type GaResult<T> = Result<T, GaError>;

/// The two failure kinds the toolkit can raise.
///
/// Errors are raised at the point of detection and propagate unchanged;
/// nothing in the crate retries or recovers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A dynamic sequence entered the system with the wrong number of
    /// components. Only two-component slices convert into a [`Vec2`].
    ///
    /// [`Vec2`]: crate::vector::Vec2
    #[error("expected a 2-component vector, got {got} components")]
    InvalidShape { got: usize },

    /// A projection or rejection divisor came out exactly zero.
    #[error("cannot {what} the zero vector")]
    DivisionByZero { what: &'static str },
}
