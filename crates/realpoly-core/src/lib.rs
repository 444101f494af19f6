//! # realpoly-core
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - [`Term`] and [`Polynomial`] values with a canonical form
//!   (descending exponents, like terms merged, no zero coefficients)
//! - Addition, subtraction, multiplication
//! - Long division with a bounded iteration count, and modulo
//! - Evaluation, parsing from text, and rendering to text
//!
//! ## Exponent range
//!
//! Exponents are limited to `0..MAX_POWER` (100). Canonicalization panics on
//! anything outside that range; the `try_` variants report it as
//! [`PolyError::ExponentOutOfRange`] instead.
//!
//! ```
//! use realpoly_core::Polynomial;
//!
//! let p = Polynomial::from_coefficients(&[1.0, 0.0, -1.0]); // x^2 - 1
//! let q = Polynomial::from_coefficients(&[1.0, -1.0]); // x - 1
//! assert_eq!(p.divide(&q).to_string(), "1 x + 1");
//! assert!(p.modulo(&q).is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod canonical;
pub mod config;
pub mod division;
pub mod error;
pub mod parse;
pub mod polynomial;
pub mod render;
pub mod term;

#[cfg(test)]
mod proptests;

pub use config::{DivisionOptions, MAX_ITERATIONS, MAX_POWER};
pub use error::{PolyError, Result};
pub use polynomial::Polynomial;
pub use render::{CoefficientFormatter, FixedFormatter, ShortestFormatter};
pub use term::Term;
