//! Unit gas pricing for verifier operations.
//!
//! Every protocol estimate reduces to counts of seven operation kinds. This
//! module prices a count of one kind under a cost table; the protocol
//! calculators only decide how many of each kind a verifier performs.

pub mod breakdown;
pub mod exponent;
pub mod model;

use std::fmt;

use serde::Serialize;

// Public re-exports
pub use breakdown::{CostBreakdown, LineItem, Tally, Term};
pub use exponent::ExponentFamily;
pub use model::{CostModel, CostTableVariant, Eip1108CostModel, Eip196CostModel};

use model::{EXP_BYTE_GAS, EXP_GAS};

/// The unit of cost accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum OperationKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
    EccAdd,
    EccMul,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Add,
        OperationKind::Sub,
        OperationKind::Mul,
        OperationKind::Div,
        OperationKind::Exp,
        OperationKind::EccAdd,
        OperationKind::EccMul,
    ];

    /// Label used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Add => "ADD",
            OperationKind::Sub => "SUB",
            OperationKind::Mul => "MUL",
            OperationKind::Div => "DIV",
            OperationKind::Exp => "EXP",
            OperationKind::EccAdd => "ECC ADD",
            OperationKind::EccMul => "ECC MUL",
        }
    }

    /// Whether the price depends on the selected cost table.
    pub fn is_curve_operation(self) -> bool {
        matches!(self, OperationKind::EccAdd | OperationKind::EccMul)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logarithm of `value` in `base`, computed as `ln(value) / ln(base)`.
///
/// Counts derived from logarithms must go through this function rather than
/// `f64::log2`: the two disagree in the last bit for some inputs, and the
/// result is fed to `ceil`.
pub fn log_base(base: f64, value: f64) -> f64 {
    value.ln() / base.ln()
}

/// Round up to the nearest integer.
pub fn ceil_to_int(value: f64) -> i64 {
    value.ceil() as i64
}

/// Gas for `count` operations of `kind` under `variant`.
///
/// `Exp` is priced with a zero exponent here; use [`exp_cost`] when the
/// exponent is known.
pub fn price(kind: OperationKind, count: i64, variant: CostTableVariant) -> i64 {
    let model = variant.model();
    match kind {
        OperationKind::Add => count * model.add(),
        OperationKind::Sub => count * model.sub(),
        OperationKind::Mul => count * model.mul(),
        OperationKind::Div => count * model.div(),
        OperationKind::Exp => exp_cost(count, 0),
        OperationKind::EccAdd => count * model.ecc_add(),
        OperationKind::EccMul => count * model.ecc_mul(),
    }
}

/// Gas for `count` exponentiations to the power `exponent`.
///
/// A zero exponent costs the flat rate. Otherwise the per-byte charge is
/// scaled by `1 + log_256(exponent)` and the product is rounded up once,
/// after multiplying by `count`. `exponent` must not be negative.
pub fn exp_cost(count: i64, exponent: i64) -> i64 {
    if exponent == 0 {
        return count * EXP_GAS;
    }
    let byte_scale = 1.0 + log_base(256.0, exponent as f64);
    ceil_to_int(count as f64 * (EXP_GAS as f64 + EXP_BYTE_GAS as f64 * byte_scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: CostTableVariant = CostTableVariant::Standard;
    const OPTIMIZED: CostTableVariant = CostTableVariant::Optimized;

    #[test]
    fn test_add_sub_cost() {
        assert_eq!(price(OperationKind::Add, 7, STANDARD), 21);
        assert_eq!(price(OperationKind::Sub, 7, OPTIMIZED), 21);
        assert_eq!(price(OperationKind::Add, 0, STANDARD), 0);
    }

    #[test]
    fn test_mul_div_cost() {
        assert_eq!(price(OperationKind::Mul, 4, STANDARD), 20);
        assert_eq!(price(OperationKind::Div, 4, OPTIMIZED), 20);
    }

    #[test]
    fn test_exp_zero_exponent() {
        assert_eq!(exp_cost(5, 0), 50);
        assert_eq!(price(OperationKind::Exp, 5, STANDARD), 50);
    }

    #[test]
    fn test_exp_cost_scales_with_exponent_bytes() {
        // log_256(1) = 0
        assert_eq!(exp_cost(1, 1), 20);
        // log_256(2) = 1/8 -> 21.25
        assert_eq!(exp_cost(1, 2), 22);
        assert_eq!(exp_cost(16, 2), 340);
        // log_256(16) = 1/2
        assert_eq!(exp_cost(1, 16), 25);
        assert_eq!(exp_cost(1, 256), 30);
        assert_eq!(exp_cost(1, 65536), 40);
    }

    #[test]
    fn test_exp_cost_rounds_after_multiplying() {
        // 2 * 21.25 = 42.5, rounded once
        assert_eq!(exp_cost(2, 2), 43);
        assert_ne!(exp_cost(2, 2), 2 * exp_cost(1, 2));
        // 3 * 21.25 = 63.75
        assert_eq!(exp_cost(3, 2), 64);
    }

    #[test]
    fn test_ecc_costs_by_table() {
        assert_eq!(price(OperationKind::EccAdd, 1, OPTIMIZED), 150);
        assert_eq!(price(OperationKind::EccAdd, 1, STANDARD), 500);
        assert_eq!(price(OperationKind::EccMul, 2, OPTIMIZED), 12_000);
        assert_eq!(price(OperationKind::EccMul, 3, STANDARD), 120_000);
    }

    #[test]
    fn test_only_curve_operations_depend_on_table() {
        for kind in OperationKind::ALL {
            let same = price(kind, 11, STANDARD) == price(kind, 11, OPTIMIZED);
            assert_eq!(same, !kind.is_curve_operation(), "{kind}");
        }
    }

    #[test]
    fn test_negative_count_is_priced() {
        assert_eq!(price(OperationKind::EccAdd, -1, OPTIMIZED), -150);
    }

    #[test]
    fn test_log_base_and_ceil() {
        assert_eq!(log_base(2.0, 256.0), 8.0);
        assert_eq!(log_base(256.0, 256.0), 1.0);
        assert_eq!(ceil_to_int(2.01), 3);
        assert_eq!(ceil_to_int(2.0), 2);
        assert_eq!(ceil_to_int(-0.5), 0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(OperationKind::EccAdd.to_string(), "ECC ADD");
        assert_eq!(OperationKind::Div.label(), "DIV");
    }
}
