//! Roots of `ax^2 + bx + c`.
//!
//! Uses the cancellation-free form of the quadratic formula:
//! `q = -(b + sign(b) * sqrt(b^2 - 4ac)) / 2`, roots `q / a` and `c / q`.

use log::debug;
use realpoly_core::{PolyError, Polynomial, Result};

/// The roots of a quadratic.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum QuadraticRoots {
    /// Two distinct real roots, smaller first.
    Distinct(f64, f64),
    /// One real root of multiplicity two.
    Repeated(f64),
    /// A complex-conjugate pair `re ± im·i`, with `im > 0`.
    Complex {
        /// Real part.
        re: f64,
        /// Imaginary part of the root with positive imaginary part.
        im: f64,
    },
}

impl QuadraticRoots {
    /// Returns the real roots, smaller first.
    #[must_use]
    pub fn real_roots(&self) -> Vec<f64> {
        match *self {
            QuadraticRoots::Distinct(a, b) => vec![a, b],
            QuadraticRoots::Repeated(r) => vec![r],
            QuadraticRoots::Complex { .. } => Vec::new(),
        }
    }

    /// Returns true if both roots are real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !matches!(self, QuadraticRoots::Complex { .. })
    }
}

/// Computes the roots of `ax^2 + bx + c`.
///
/// # Errors
///
/// Returns [`PolyError::NotQuadratic`] if `a` is zero.
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Result<QuadraticRoots> {
    if a == 0.0 {
        return Err(PolyError::NotQuadratic);
    }

    let disc = b * b - 4.0 * a * c;
    debug!("quadratic {a}x^2 + {b}x + {c}: discriminant {disc}");

    if disc < 0.0 {
        return Ok(QuadraticRoots::Complex {
            re: -b / (2.0 * a),
            im: (-disc).sqrt() / (2.0 * a).abs(),
        });
    }

    if disc == 0.0 {
        return Ok(QuadraticRoots::Repeated(-b / (2.0 * a)));
    }

    // |b + sign(b) * sqrt(disc)| >= sqrt(disc) > 0, so q is never zero.
    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let (r1, r2) = (q / a, c / q);

    Ok(if r1 <= r2 {
        QuadraticRoots::Distinct(r1, r2)
    } else {
        QuadraticRoots::Distinct(r2, r1)
    })
}

/// Computes the roots of a degree-2 polynomial.
///
/// # Errors
///
/// Returns [`PolyError::NotQuadratic`] unless the polynomial has degree 2.
pub fn quadratic_roots_of(p: &Polynomial) -> Result<QuadraticRoots> {
    if p.degree() != Some(2) {
        return Err(PolyError::NotQuadratic);
    }
    quadratic_roots(p.coefficient_of(2), p.coefficient_of(1), p.coefficient_of(0))
}
