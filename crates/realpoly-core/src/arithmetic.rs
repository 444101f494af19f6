//! Ring operations: addition, subtraction, multiplication.
//!
//! Every operation reads canonical views of its operands and returns a
//! freshly canonicalized polynomial. Operands are never modified.

use crate::canonical::canonical_form;
use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Adds two polynomials.
    ///
    /// The term lists are concatenated and canonicalization merges the
    /// like terms.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let lhs = self.terms();
        let rhs = other.terms();

        let mut terms = Vec::with_capacity(lhs.len() + rhs.len());
        terms.extend_from_slice(&lhs);
        terms.extend_from_slice(&rhs);

        Self::from_canonical(canonical_form(terms))
    }

    /// Subtracts `other` from `self`.
    ///
    /// Computed as `self + other * (-1)`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.multiply(&Self::constant(-1.0)))
    }

    /// Multiplies two polynomials.
    ///
    /// Every pair of terms contributes one product term, so `|P| * |Q|`
    /// terms are aggregated.
    ///
    /// # Panics
    ///
    /// Panics if a product exponent reaches `MAX_POWER`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let lhs = self.terms();
        let rhs = other.terms();

        let mut terms = Vec::with_capacity(lhs.len() * rhs.len());
        for a in lhs.iter() {
            for b in rhs.iter() {
                terms.push(a.multiply(b));
            }
        }

        Self::from_canonical(canonical_form(terms))
    }

    /// Multiplies every term by a single term.
    #[must_use]
    pub fn multiply_term(&self, term: &Term) -> Self {
        self.multiply(&term.to_polynomial())
    }

    /// Negates the polynomial.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        let terms = self
            .terms()
            .iter()
            .map(|t| Term::new(t.coefficient() * c, t.exponent()))
            .collect();
        Self::from_canonical(canonical_form(terms))
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Panics if the result's degree reaches `MAX_POWER`.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.canonicalized();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.multiply(&base);
            }
        }

        result
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl std::ops::$imp<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$inner(self, rhs)
            }
        }

        impl std::ops::$imp for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$inner(&self, &rhs)
            }
        }

        impl std::ops::$imp<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$inner(&self, rhs)
            }
        }

        impl std::ops::$imp<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$inner(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);
forward_binop!(Div, div, divide);
forward_binop!(Rem, rem, modulo);

impl std::ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl num_traits::Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl num_traits::One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl std::iter::Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc.add(&p))
    }
}

impl std::iter::Product for Polynomial {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, p| acc.multiply(&p))
    }
}
