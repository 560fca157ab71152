//! Sigma protocols binding the range proof to the aggregated statements.
//!
//! SK and R are single Schnorr-style checks. AB and Y fold `m` statements
//! with powers of the challenge `z`, so their counts grow with `m` and assume
//! at least two statements.

use crate::cost::{CostBreakdown, CostTableVariant, ExponentFamily, OperationKind, Tally};
use crate::protocol::Protocol;

fn schnorr_check(variant: CostTableVariant, protocol: Protocol) -> CostBreakdown {
    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::EccAdd, "+ c*Y", 1)
        .charge(OperationKind::EccMul, "s * g", 1)
        .charge(OperationKind::EccMul, "c * Y", 1);
    tally.finish(protocol)
}

/// Knowledge of the secret key.
pub fn sigma_sk(variant: CostTableVariant) -> CostBreakdown {
    schnorr_check(variant, Protocol::SigmaSk)
}

/// Knowledge of the commitment randomness.
pub fn sigma_r(variant: CostTableVariant) -> CostBreakdown {
    schnorr_check(variant, Protocol::SigmaR)
}

/// Consistency of the `D` and `C_i` commitments across `m` statements.
pub fn sigma_ab(variant: CostTableVariant, m: i64) -> CostBreakdown {
    let mut tally = Tally::new(variant);
    tally
        .charge_exp("z^2, z^2", 2, 2)
        .charge_family(ExponentFamily::shifted("sumZD: z^(i+2)", m - 1, 2))
        .charge_family(ExponentFamily::shifted("sumZCi: z^(i+2)", m - 1, 2));

    tally
        .charge(OperationKind::EccAdd, "+ ssk", 1)
        .charge(OperationKind::EccAdd, "- sumD", 1)
        .charge(OperationKind::EccAdd, "+ sumZD", 1)
        .charge(OperationKind::EccAdd, "+ c", 1)
        .charge(OperationKind::EccAdd, "- sumCi", 1)
        .charge(OperationKind::EccAdd, "+ sumZCi", 1)
        .charge(OperationKind::EccAdd, "sumD", m - 2)
        .charge(OperationKind::EccAdd, "sumZD", m - 2)
        .charge(OperationKind::EccAdd, "sumCi", m - 2)
        .charge(OperationKind::EccAdd, "sumZCi", m - 2);

    tally
        .charge(OperationKind::EccMul, "* g", 1)
        .charge(OperationKind::EccMul, "* z^2 (D)", 1)
        .charge(OperationKind::EccMul, "* Cr", 1)
        .charge(OperationKind::EccMul, "z^(i+1) * D", m - 1)
        .charge(OperationKind::EccMul, "* z^2 (C)", 1)
        .charge(OperationKind::EccMul, "* Cl", 1)
        .charge(OperationKind::EccMul, "z^(i+1) * Ci", m - 1)
        .charge(OperationKind::EccMul, "negate sumD", 1)
        .charge(OperationKind::EccMul, "negate sumCi", 1);

    tally.finish(Protocol::SigmaAb)
}

/// Equality of the public keys `y_i` and commitments `C_i` with the first.
pub fn sigma_y(variant: CostTableVariant, m: i64) -> CostBreakdown {
    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::EccAdd, "(y - yi)", m - 1)
        .charge(OperationKind::EccAdd, "sumSrYYi", m - 2)
        .charge(OperationKind::EccAdd, "(C - Ci)", m - 1)
        .charge(OperationKind::EccAdd, "sumCCi", m - 2)
        .charge(OperationKind::EccAdd, "+ c", 1);

    tally
        .charge(OperationKind::EccMul, "* (y - yi)", m - 1)
        .charge(OperationKind::EccMul, "* sumCCi", 1)
        .charge(OperationKind::EccMul, "negate yi", m - 1)
        .charge(OperationKind::EccMul, "negate Ci", m - 1);

    tally.finish(Protocol::SigmaY)
}
