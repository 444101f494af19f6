//! Property-based tests for canonical form and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::canonical::is_canonical;
    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Small integer coefficients keep every sum and product exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20i32).prop_map(f64::from)
    }

    // Arbitrary, possibly non-canonical term bags with exponents 0..=8.
    fn term_bag() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0u32..=8u32), 0..=8).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(c, e)| Term::new(c, e))
                .collect::<Polynomial>()
        })
    }

    // Coefficient lists of degree 0-4.
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|coeffs| Polynomial::from_coefficients(&coeffs))
    }

    fn monic_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 0..=3).prop_map(|mut coeffs| {
            coeffs.insert(0, 1.0);
            Polynomial::from_coefficients(&coeffs)
        })
    }

    proptest! {
        #[test]
        fn canonicalize_idempotent(p in term_bag()) {
            let mut once = p.clone();
            once.canonicalize();
            let mut twice = once.clone();
            twice.canonicalize();
            prop_assert_eq!(once.raw_terms(), twice.raw_terms());
        }

        #[test]
        fn canonical_shape(p in term_bag(), q in term_bag()) {
            prop_assert!(is_canonical(&p.terms()));
            prop_assert!(is_canonical(&p.add(&q).terms()));
            prop_assert!(is_canonical(&p.subtract(&q).terms()));
            prop_assert!(is_canonical(&p.multiply(&q).terms()));
        }

        #[test]
        fn add_identity(p in term_bag()) {
            prop_assert_eq!(p.add(&Polynomial::zero()), p);
        }

        #[test]
        fn add_inverse(p in term_bag()) {
            let diff = p.subtract(&p);
            prop_assert!(diff.terms().is_empty());
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn exact_division(q in monic_poly(), k in small_poly()) {
            // A monic divisor keeps every quotient coefficient an integer.
            let p = q.multiply(&k);
            let quot = p.divide(&q);
            let rem = p.modulo(&q);

            prop_assert_eq!(q.multiply(&quot).add(&rem), p);
            prop_assert!(rem.is_zero());
        }

        #[test]
        fn remainder_degree_below_divisor(p in small_poly(), q in monic_poly()) {
            let rem = p.modulo(&q);
            let dq = q.degree().unwrap();
            prop_assert!(rem.degree().map_or(true, |d| d < dq));
        }

        #[test]
        fn evaluation_homomorphism(a in small_poly(), b in small_poly(), x in -3i32..=3i32) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).evaluate(x), a.evaluate(x) + b.evaluate(x));
            prop_assert_eq!(a.multiply(&b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn coefficient_of_absent_is_zero(p in small_poly(), e in 0u32..=12u32) {
            let present = p.terms().iter().any(|t| t.exponent() == e);
            if !present {
                prop_assert_eq!(p.coefficient_of(e), 0.0);
            }
        }

        #[test]
        fn parse_matches_coefficients(coeffs in proptest::collection::vec(small_coeff(), 0..=6)) {
            let text = coeffs.iter().map(f64::to_string).collect::<Vec<_>>().join(" ");
            let parsed: Polynomial = text.parse().unwrap();
            prop_assert_eq!(parsed, Polynomial::from_coefficients(&coeffs));
        }
    }
}
