//! Polynomial long division with a bounded iteration count.
//!
//! Each step cancels the leading term of the running remainder. With
//! floating-point coefficients the cancellation is not always exact, so the
//! loop is capped by [`DivisionOptions::max_iterations`]. Reaching the cap is
//! not an error: the quotient accumulated so far is returned, and the
//! remainder derived from it is correspondingly inexact.

use log::{debug, warn};

use crate::config::DivisionOptions;
use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Returns the quotient of `self / divisor`, discarding the remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn divide(&self, divisor: &Self) -> Self {
        self.divide_with(divisor, &DivisionOptions::default())
    }

    /// Like [`Polynomial::divide`] with an explicit iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn divide_with(&self, divisor: &Self, options: &DivisionOptions) -> Self {
        let divisor = divisor.canonicalized();
        let Some(lead) = divisor.leading_term() else {
            panic!("division by zero polynomial");
        };

        let mut remainder = self.canonicalized();
        let mut quotient = Self::new();
        let mut steps = 0;

        while steps < options.max_iterations {
            let Some(top) = remainder.leading_term() else {
                break;
            };
            if top.exponent() < lead.exponent() {
                break;
            }

            let mut step = Term::default();
            step.set_coefficient(top.coefficient() / lead.coefficient());
            step.set_exponent(top.exponent() - lead.exponent());
            quotient.add_term(step);

            remainder = remainder.subtract(&step.to_polynomial().multiply(&divisor));
            steps += 1;
        }

        if steps == options.max_iterations
            && remainder.degree().is_some_and(|d| d >= lead.exponent())
        {
            warn!(
                "polynomial division stopped after {steps} iterations; quotient is truncated"
            );
        } else {
            debug!("polynomial division finished in {steps} iterations");
        }

        quotient.canonicalize();
        quotient
    }

    /// Returns the remainder of `self / divisor`.
    ///
    /// Computed as `self - divisor * (self / divisor)`, so a truncated
    /// quotient yields an inexact remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn modulo(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Returns `(quotient, remainder)` of `self / divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        self.div_rem_with(divisor, &DivisionOptions::default())
    }

    /// Like [`Polynomial::div_rem`] with an explicit iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn div_rem_with(&self, divisor: &Self, options: &DivisionOptions) -> (Self, Self) {
        let quotient = self.divide_with(divisor, options);
        let remainder = self.subtract(&divisor.multiply(&quotient));
        (quotient, remainder)
    }

    /// Checked quotient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(self.divide(divisor))
    }

    /// Checked remainder.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(self.modulo(divisor))
    }

    /// Returns true if `divisor` divides `self` with a zero remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        self.modulo(divisor).is_zero()
    }
}
