//! Families of exponentiations with consecutive exponents.
//!
//! Verifiers often compute every power of a challenge up to some bound
//! (`y^0 .. y^(mn-1)`). Exponentiation cost is not linear in the exponent,
//! so a family is priced one exponent at a time.

use std::ops::Range;

use serde::Serialize;

use super::exp_cost;

/// Exponents `start, start + 1, .., start + len - 1` of one base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExponentFamily {
    pub label: &'static str,
    pub start: i64,
    pub len: i64,
}

impl ExponentFamily {
    /// `x^0 .. x^(len-1)`.
    pub fn powers(label: &'static str, len: i64) -> Self {
        Self {
            label,
            start: 0,
            len,
        }
    }

    /// `x^(offset+1) .. x^(offset+len)`.
    pub fn shifted(label: &'static str, len: i64, offset: i64) -> Self {
        Self {
            label,
            start: offset + 1,
            len,
        }
    }

    /// The exponents in this family. Empty when `len <= 0`.
    pub fn exponents(&self) -> Range<i64> {
        self.start..self.start + self.len.max(0)
    }

    /// Number of exponentiations as the verifier counts them.
    pub fn count(&self) -> i64 {
        self.len
    }

    /// Total gas, one exponentiation per exponent.
    pub fn cost(&self) -> i64 {
        self.exponents().map(|e| exp_cost(1, e)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powers_start_at_zero() {
        let family = ExponentFamily::powers("y^i", 4);
        assert_eq!(family.exponents().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(family.count(), 4);
    }

    #[test]
    fn test_shifted_family() {
        // z^(2+j), j = 1..=3
        let family = ExponentFamily::shifted("z^(2+j)", 3, 2);
        assert_eq!(family.exponents().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_family_priced_per_exponent() {
        // y^0 = 10, y^1 = 20, y^2 = 22
        let family = ExponentFamily::powers("y^i", 3);
        assert_eq!(family.cost(), 52);
        let averaged = exp_cost(3, 1);
        assert_ne!(family.cost(), averaged);
    }

    #[test]
    fn test_family_is_restartable() {
        let family = ExponentFamily::powers("2^i", 64);
        assert_eq!(family.cost(), family.cost());
        assert_eq!(family.exponents().count(), family.exponents().count());
    }

    #[test]
    fn test_empty_family() {
        let family = ExponentFamily::shifted("z^(i+2)", 0, 2);
        assert_eq!(family.exponents().count(), 0);
        assert_eq!(family.cost(), 0);
        let negative = ExponentFamily::powers("y^i", -3);
        assert_eq!(negative.cost(), 0);
        assert_eq!(negative.count(), -3);
    }
}
