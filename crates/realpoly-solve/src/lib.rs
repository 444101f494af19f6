//! Closed-form root formulas for low-degree polynomials.
//!
//! - **Quadratic**: real or complex-conjugate roots of `ax^2 + bx + c`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod quadratic;

pub use quadratic::{quadratic_roots, quadratic_roots_of, QuadraticRoots};
