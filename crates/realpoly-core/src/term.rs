//! Single monomials `c * x^e`.

use crate::config::MAX_POWER;
use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// One monomial of a polynomial: a real coefficient and an exponent of x.
///
/// Exponents are non-negative by construction. The upper bound
/// (`exponent < MAX_POWER`) is a caller contract that is enforced when the
/// owning polynomial is canonicalized; [`Term::try_new`] checks it eagerly.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Term {
    coefficient: f64,
    exponent: u32,
}

impl Term {
    /// Creates the term `coefficient * x^exponent`.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: u32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Creates a term, rejecting exponents outside `0..MAX_POWER`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOutOfRange`] when `exponent >= MAX_POWER`.
    pub fn try_new(coefficient: f64, exponent: u32) -> Result<Self> {
        if exponent >= MAX_POWER {
            return Err(PolyError::ExponentOutOfRange {
                exponent: u64::from(exponent),
            });
        }
        Ok(Self::new(coefficient, exponent))
    }

    /// Creates the constant term `c * x^0`.
    #[must_use]
    pub const fn constant(c: f64) -> Self {
        Self::new(c, 0)
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent of x.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Replaces the coefficient.
    pub fn set_coefficient(&mut self, value: f64) {
        self.coefficient = value;
    }

    /// Replaces the exponent.
    pub fn set_exponent(&mut self, value: u32) {
        self.exponent = value;
    }

    /// Multiplies two terms: coefficients multiply, exponents add.
    ///
    /// The sum may exceed `MAX_POWER`; that is reported when the result is
    /// canonicalized, not here.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.coefficient * other.coefficient,
            self.exponent.saturating_add(other.exponent),
        )
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powi(i32::try_from(self.exponent).unwrap_or(i32::MAX))
    }

    /// Wraps the term as a single-term polynomial.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        Polynomial::from_terms(vec![*self])
    }
}

impl std::ops::Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}
