//! Engine limits and tunable options.

/// Exclusive upper bound on term exponents.
///
/// Canonicalization aggregates like terms in a dense accumulator with one
/// slot per exponent, so every exponent must lie in `0..MAX_POWER`.
pub const MAX_POWER: u32 = 100;

/// Default iteration cap for polynomial long division.
///
/// Floating-point subtraction does not always cancel the leading term
/// exactly, so the division loop stops after this many steps.
pub const MAX_ITERATIONS: usize = 1000;

/// Options controlling polynomial long division.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DivisionOptions {
    /// Maximum number of quotient terms produced before the loop stops.
    pub max_iterations: usize,
}

impl DivisionOptions {
    /// Creates options with the default iteration cap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Returns a copy with a different iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for DivisionOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap() {
        assert_eq!(DivisionOptions::default().max_iterations, MAX_ITERATIONS);
        assert_eq!(DivisionOptions::new().with_max_iterations(3).max_iterations, 3);
    }
}
