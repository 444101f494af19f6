//! The polynomial container, its constructors and read-only queries.

use std::borrow::Cow;

use crate::canonical;
use crate::error::Result;
use crate::term::Term;

/// A single-variable polynomial with real coefficients.
///
/// Terms are owned exclusively; cloning deep-copies them. Storage may be
/// temporarily non-canonical after [`Polynomial::add_term`] or
/// [`Polynomial::from_terms`]. Every query and arithmetic operation reads a
/// canonical view, so callers never observe the difference; call
/// [`Polynomial::canonicalize`] to commit the canonical form in place.
///
/// Equality compares canonical forms.
#[derive(Clone, Debug)]
pub struct Polynomial {
    terms: Vec<Term>,
    canonical: bool,
}

impl Polynomial {
    /// Creates the zero polynomial (no terms).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            terms: Vec::new(),
            canonical: true,
        }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::from_terms(vec![Term::constant(c)])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: f64, n: u32) -> Self {
        Self::from_terms(vec![Term::new(c, n)])
    }

    /// Creates a polynomial from an arbitrary list of terms.
    ///
    /// Like terms, zero coefficients and any order are accepted.
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self {
            terms,
            canonical: false,
        }
    }

    /// Creates a polynomial from coefficients, highest power first.
    ///
    /// With `n` coefficients, the one at position `i` multiplies
    /// `x^(n - i - 1)`: `[3, 0, 2]` is `3x^2 + 2`.
    #[must_use]
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        let n = coefficients.len();
        coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| Term::new(c, u32::try_from(n - i - 1).unwrap_or(u32::MAX)))
            .collect()
    }

    /// Wraps a term list that is already canonical.
    pub(crate) fn from_canonical(terms: Vec<Term>) -> Self {
        debug_assert!(canonical::is_canonical(&terms));
        Self {
            terms,
            canonical: true,
        }
    }

    /// Appends a term without canonicalizing.
    pub fn add_term(&mut self, term: Term) {
        self.terms.push(term);
        self.canonical = false;
    }

    /// Brings the stored terms into canonical form in place.
    ///
    /// Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if any exponent is `>= MAX_POWER`.
    pub fn canonicalize(&mut self) {
        if !self.canonical {
            let terms = canonical::canonical_form(self.terms.clone());
            self.terms = terms;
            self.canonical = true;
        }
    }

    /// Fallible form of [`Polynomial::canonicalize`].
    ///
    /// On error the stored terms are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PolyError::ExponentOutOfRange`] for any exponent
    /// `>= MAX_POWER`.
    pub fn try_canonicalize(&mut self) -> Result<()> {
        if !self.canonical {
            self.terms = canonical::try_canonical_form(self.terms.clone())?;
            self.canonical = true;
        }
        Ok(())
    }

    /// Returns a canonical copy.
    #[must_use]
    pub fn canonicalized(&self) -> Self {
        Self::from_canonical(self.terms().into_owned())
    }

    /// Returns true if the stored terms are known to be canonical.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Returns the terms in canonical form.
    ///
    /// Borrows the storage when it is already canonical.
    ///
    /// # Panics
    ///
    /// Panics if any exponent is `>= MAX_POWER`.
    #[must_use]
    pub fn terms(&self) -> Cow<'_, [Term]> {
        if self.canonical {
            Cow::Borrowed(&self.terms)
        } else {
            Cow::Owned(canonical::canonical_form(self.terms.clone()))
        }
    }

    /// Returns the stored terms exactly as they are, canonical or not.
    #[must_use]
    pub fn raw_terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms().is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.leading_term().map(|t| t.exponent())
    }

    /// Returns the highest-exponent term.
    #[must_use]
    pub fn leading_term(&self) -> Option<Term> {
        self.terms().first().copied()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<f64> {
        self.leading_term().map(|t| t.coefficient())
    }

    /// Finds the index of `exponent` in the canonical term list.
    ///
    /// Binary search over the descending exponent sequence.
    #[must_use]
    pub fn position_of(&self, exponent: u32) -> Option<usize> {
        self.terms()
            .binary_search_by(|t| exponent.cmp(&t.exponent()))
            .ok()
    }

    /// Returns the coefficient of `x^exponent`.
    ///
    /// An absent exponent has coefficient zero.
    #[must_use]
    pub fn coefficient_of(&self, exponent: u32) -> f64 {
        self.position_of(exponent)
            .and_then(|i| self.term_at(i))
            .map_or(0.0, |t| t.coefficient())
    }

    /// Returns the number of terms in canonical form.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms().len()
    }

    /// Returns the canonical term at `index`.
    #[must_use]
    pub fn term_at(&self, index: usize) -> Option<Term> {
        self.terms().get(index).copied()
    }

    /// Evaluates the polynomial at `x` by summing every stored term.
    ///
    /// The sum does not depend on term order, duplicates or zero terms, so
    /// no canonicalization happens here.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        *self.terms() == *other.terms()
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms(vec![term])
    }
}

impl From<f64> for Polynomial {
    fn from(c: f64) -> Self {
        Self::constant(c)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::from_coefficients(&coefficients)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter.into_iter().collect())
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term);
        }
    }
}
