//! Canonicalization: ordering and like-term aggregation.
//!
//! A term list is canonical when its exponents are strictly descending,
//! no exponent repeats and no coefficient is zero. The zero polynomial is
//! the empty list.
//!
//! The pipeline is:
//! 1. Partition-exchange sort by exponent (Lomuto), ascending.
//! 2. Reverse, giving descending order.
//! 3. Aggregate into a dense accumulator with one slot per exponent in
//!    `0..MAX_POWER`, then rebuild from the highest slot down, dropping
//!    zero slots.

use log::trace;

use crate::config::MAX_POWER;
use crate::error::{PolyError, Result};
use crate::term::Term;

/// Sorts terms by ascending exponent in place.
///
/// Quicksort with the Lomuto partition scheme. Only the smaller side is
/// handled recursively; the larger side is processed by the loop, so the
/// stack depth is logarithmic in the number of terms.
pub fn sort_by_exponent(terms: &mut [Term]) {
    let mut slice = terms;
    while slice.len() > 1 {
        let current = slice;
        let pivot = partition(current);
        let (left, right) = current.split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            sort_by_exponent(left);
            slice = right;
        } else {
            sort_by_exponent(right);
            slice = left;
        }
    }
}

/// Lomuto partition around the last element's exponent.
///
/// Terms with an exponent strictly less than the pivot end up on its left.
/// Returns the pivot's final index.
fn partition(terms: &mut [Term]) -> usize {
    let high = terms.len() - 1;
    let pivot = terms[high].exponent();
    let mut store = 0;

    for j in 0..high {
        if terms[j].exponent() < pivot {
            terms.swap(store, j);
            store += 1;
        }
    }

    terms.swap(store, high);
    store
}

/// Merges like terms and drops zero coefficients.
///
/// The output is in strictly descending exponent order regardless of the
/// input order.
///
/// # Errors
///
/// Returns [`PolyError::ExponentOutOfRange`] for any exponent `>= MAX_POWER`.
#[allow(clippy::float_cmp)]
pub fn aggregate(terms: &[Term]) -> Result<Vec<Term>> {
    let mut slots = [0.0_f64; MAX_POWER as usize];

    for term in terms {
        let slot = slots
            .get_mut(term.exponent() as usize)
            .ok_or(PolyError::ExponentOutOfRange {
                exponent: u64::from(term.exponent()),
            })?;
        *slot += term.coefficient();
    }

    Ok((0..MAX_POWER)
        .rev()
        .filter(|&e| slots[e as usize] != 0.0)
        .map(|e| Term::new(slots[e as usize], e))
        .collect())
}

/// Brings a term list into canonical form.
///
/// # Errors
///
/// Returns [`PolyError::ExponentOutOfRange`] for any exponent `>= MAX_POWER`.
pub fn try_canonical_form(mut terms: Vec<Term>) -> Result<Vec<Term>> {
    let before = terms.len();
    sort_by_exponent(&mut terms);
    terms.reverse();
    let canonical = aggregate(&terms)?;
    trace!("canonicalized {before} terms into {}", canonical.len());
    Ok(canonical)
}

/// Brings a term list into canonical form.
///
/// # Panics
///
/// Panics if any exponent is `>= MAX_POWER`. Out-of-range exponents are a
/// contract violation on the arithmetic path.
#[must_use]
pub fn canonical_form(terms: Vec<Term>) -> Vec<Term> {
    match try_canonical_form(terms) {
        Ok(canonical) => canonical,
        Err(err) => panic!("cannot canonicalize polynomial: {err}"),
    }
}

/// Returns true if the slice already satisfies the canonical invariants.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_canonical(terms: &[Term]) -> bool {
    terms.iter().all(|t| t.coefficient() != 0.0 && t.exponent() < MAX_POWER)
        && terms.windows(2).all(|w| w[0].exponent() > w[1].exponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exponents(terms: &[Term]) -> Vec<u32> {
        terms.iter().map(Term::exponent).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut terms: Vec<Term> = [5, 1, 4, 1, 0, 9, 2, 6]
            .iter()
            .map(|&e| Term::new(1.0, e))
            .collect();
        sort_by_exponent(&mut terms);
        assert_eq!(exponents(&terms), vec![0, 1, 1, 2, 4, 5, 6, 9]);
    }

    #[test]
    fn test_sort_descending_input() {
        // Worst case for a last-element pivot.
        let mut terms: Vec<Term> = (0..60).rev().map(|e| Term::new(1.0, e)).collect();
        sort_by_exponent(&mut terms);
        assert_eq!(exponents(&terms), (0..60).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_trivial() {
        let mut empty: Vec<Term> = Vec::new();
        sort_by_exponent(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![Term::new(2.0, 3)];
        sort_by_exponent(&mut single);
        assert_eq!(single, vec![Term::new(2.0, 3)]);
    }

    #[test]
    fn test_aggregate_merges_and_drops_zeros() {
        // 2x + 3 + 4x - 3 + x^2 = x^2 + 6x
        let terms = vec![
            Term::new(2.0, 1),
            Term::new(3.0, 0),
            Term::new(4.0, 1),
            Term::new(-3.0, 0),
            Term::new(1.0, 2),
        ];
        let out = aggregate(&terms).unwrap();
        assert_eq!(out, vec![Term::new(1.0, 2), Term::new(6.0, 1)]);
    }

    #[test]
    fn test_aggregate_rejects_out_of_range() {
        let terms = vec![Term::new(1.0, 1), Term::new(1.0, MAX_POWER)];
        assert_eq!(
            aggregate(&terms),
            Err(PolyError::ExponentOutOfRange { exponent: 100 })
        );
    }

    #[test]
    fn test_canonical_form_idempotent() {
        let terms = vec![Term::new(1.0, 0), Term::new(2.0, 3), Term::new(-1.0, 0)];
        let once = canonical_form(terms);
        let twice = canonical_form(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, vec![Term::new(2.0, 3)]);
        assert!(is_canonical(&once));
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(&[]));
        assert!(!is_canonical(&[Term::new(1.0, 1), Term::new(1.0, 1)]));
        assert!(!is_canonical(&[Term::new(1.0, 1), Term::new(1.0, 2)]));
        assert!(!is_canonical(&[Term::new(0.0, 1)]));
    }

    #[test]
    #[should_panic(expected = "cannot canonicalize polynomial")]
    fn test_canonical_form_panics_out_of_range() {
        let _ = canonical_form(vec![Term::new(1.0, 250)]);
    }
}
