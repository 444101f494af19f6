//! Parsing polynomials from whitespace-separated coefficient lists.
//!
//! `"3 0 2"` parses to `3x^2 + 2`: coefficients are listed highest power
//! first, exactly as in [`Polynomial::from_coefficients`].

use std::str::FromStr;

use crate::config::MAX_POWER;
use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

impl Polynomial {
    /// Parses whitespace-separated coefficients, highest power first.
    ///
    /// Blank input parses to the zero polynomial.
    ///
    /// # Errors
    ///
    /// - [`PolyError::MalformedInput`] for a token that is not a finite
    ///   number, naming the token and its position.
    /// - [`PolyError::ExponentOutOfRange`] when there are more than
    ///   `MAX_POWER` coefficients.
    pub fn parse(input: &str) -> Result<Self> {
        let coefficients = input
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_coefficient(index, token))
            .collect::<Result<Vec<f64>>>()?;

        if coefficients.len() > MAX_POWER as usize {
            return Err(PolyError::ExponentOutOfRange {
                exponent: (coefficients.len() - 1) as u64,
            });
        }

        Ok(Self::from_coefficients(&coefficients))
    }
}

fn parse_coefficient(index: usize, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PolyError::MalformedInput {
            token: token.to_string(),
            index,
        })
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
