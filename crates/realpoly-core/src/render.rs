//! Text rendering of terms and polynomials.
//!
//! Coefficients go through a [`CoefficientFormatter`], so callers can plug
//! in their own number formatting. The layout is
//! `c_n x^n + ... + c_1 x + c_0`, highest power first, with zero
//! coefficients left out. The zero polynomial renders as `0`.

use std::fmt;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Renders a single coefficient as text.
pub trait CoefficientFormatter {
    /// Formats `value`.
    fn format(&self, value: f64) -> String;
}

impl<F: Fn(f64) -> String> CoefficientFormatter for F {
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// Shortest text that round-trips to the same `f64` (`3.0` renders as `3`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ShortestFormatter;

impl CoefficientFormatter for ShortestFormatter {
    fn format(&self, value: f64) -> String {
        value.to_string()
    }
}

/// Fixed number of digits after the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedFormatter {
    /// Digits after the decimal point.
    pub precision: usize,
}

impl FixedFormatter {
    /// Creates a formatter with the given precision.
    #[must_use]
    pub const fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl CoefficientFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl Term {
    /// Renders the term with the given coefficient formatter.
    #[must_use]
    pub fn render_with<F: CoefficientFormatter + ?Sized>(&self, formatter: &F) -> String {
        let c = formatter.format(self.coefficient());
        match self.exponent() {
            0 => c,
            1 => format!("{c} x"),
            e => format!("{c} x^{e}"),
        }
    }
}

impl Polynomial {
    /// Renders the polynomial with the given coefficient formatter.
    #[must_use]
    pub fn render_with<F: CoefficientFormatter + ?Sized>(&self, formatter: &F) -> String {
        let terms = self.terms();
        if terms.is_empty() {
            return formatter.format(0.0);
        }

        terms
            .iter()
            .map(|t| t.render_with(formatter))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&ShortestFormatter))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&ShortestFormatter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let p = Polynomial::from_coefficients(&[3.0, 1.0, 3.0]);
        assert_eq!(p.to_string(), "3 x^2 + 1 x + 3");
    }

    #[test]
    fn test_display_skips_zero_coefficients() {
        // 3x^4 + 2 has no x^3, x^2 or x terms.
        let p = Polynomial::from_coefficients(&[3.0, 0.0, 0.0, 0.0, 2.0]);
        assert_eq!(p.to_string(), "3 x^4 + 2");
    }

    #[test]
    fn test_display_zero_and_negative() {
        assert_eq!(Polynomial::zero().to_string(), "0");

        let p = Polynomial::from_coefficients(&[-1.5, 0.0]);
        assert_eq!(p.to_string(), "-1.5 x");
    }

    #[test]
    fn test_display_canonicalizes() {
        let p = Polynomial::from_terms(vec![Term::new(2.0, 0), Term::new(1.0, 3), Term::new(1.0, 0)]);
        assert_eq!(p.to_string(), "1 x^3 + 3");
    }

    #[test]
    fn test_fixed_formatter() {
        let p = Polynomial::from_coefficients(&[0.5, -2.0]);
        assert_eq!(p.render_with(&FixedFormatter::new(2)), "0.50 x + -2.00");
        assert_eq!(Polynomial::zero().render_with(&FixedFormatter::new(1)), "0.0");
    }

    #[test]
    fn test_closure_formatter() {
        let p = Polynomial::from_coefficients(&[1.0, 2.0]);
        let bracketed = |v: f64| format!("[{v}]");
        assert_eq!(p.render_with(&bracketed), "[1] x + [2]");
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::new(4.0, 0).to_string(), "4");
        assert_eq!(Term::new(4.0, 1).to_string(), "4 x");
        assert_eq!(Term::new(4.25, 7).to_string(), "4.25 x^7");
    }
}
