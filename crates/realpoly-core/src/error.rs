//! Error types for polynomial construction and checked arithmetic.

use thiserror::Error;

use crate::config::MAX_POWER;

/// Errors reported by the fallible polynomial operations.
///
/// The unchecked arithmetic path treats out-of-range exponents and zero
/// divisors as contract violations and panics; the `try_` and `checked_`
/// variants surface the same conditions through this type.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolyError {
    /// A token in textual input is not a finite real number.
    #[error("malformed input: token {index} `{token}` is not a finite number")]
    MalformedInput {
        /// The offending token, verbatim.
        token: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },

    /// A term exponent falls outside `0..MAX_POWER`.
    #[error("exponent {exponent} is out of range (must be below {max})", max = MAX_POWER)]
    ExponentOutOfRange {
        /// The rejected exponent.
        exponent: u64,
    },

    /// The divisor is the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,

    /// The polynomial or coefficients do not describe a quadratic.
    #[error("not a quadratic: x^2 coefficient must not be 0")]
    NotQuadratic,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolyError>;
