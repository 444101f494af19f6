//! # realpoly
//!
//! Single-variable polynomial algebra over real coefficients.
//!
//! ## Features
//!
//! - **Canonical Form**: Descending exponents, merged like terms, no zeros
//! - **Arithmetic**: Addition, subtraction, multiplication, long division, modulo
//! - **Text**: Parse whitespace-separated coefficients, render with pluggable formatters
//! - **Roots**: Closed-form quadratic roots
//!
//! ## Quick Start
//!
//! ```rust
//! use realpoly::prelude::*;
//!
//! let p: Polynomial = "3 0 2".parse().unwrap(); // 3x^2 + 2
//! let q = Polynomial::from_coefficients(&[1.0, 1.0]); // x + 1
//!
//! assert_eq!((&p * &q).to_string(), "3 x^3 + 3 x^2 + 2 x + 2");
//! assert_eq!(p.evaluate(2.0), 14.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use realpoly_core as core;
pub use realpoly_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use realpoly_core::{
        CoefficientFormatter, DivisionOptions, FixedFormatter, PolyError, Polynomial,
        ShortestFormatter, Term, MAX_ITERATIONS, MAX_POWER,
    };
    pub use realpoly_solve::{quadratic_roots, quadratic_roots_of, QuadraticRoots};
}
