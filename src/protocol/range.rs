//! Aggregated range proof verifier: the polynomial check on `t^` and the
//! commitment reconstruction handed to the inner-product argument.

use crate::cost::{CostBreakdown, CostTableVariant, ExponentFamily, OperationKind, Tally};
use crate::protocol::Protocol;

/// Range proof check `t^·g + tau·h == z^2·V + delta(y,z)·g + x·T1 + x^2·T2`.
pub fn range_proof(variant: CostTableVariant, n: i64, m: i64) -> CostBreakdown {
    let mn = m * n;

    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::Add, "<1^mn, y^mn>", mn - 1)
        .charge(OperationKind::Add, "<1^mn, 2^mn>", mn - 1)
        .charge(OperationKind::Add, "sumZ", m - 1);

    tally
        .charge(OperationKind::Mul, "* <1^mn, y^mn>", 1)
        .charge(OperationKind::Mul, "* <1^mn, 2^mn>", 1)
        .charge(OperationKind::Mul, "* (t^ - delta)", 1)
        .charge(OperationKind::Mul, "* x", 1)
        .charge(OperationKind::Mul, "* x^2", 1);

    tally
        .charge(OperationKind::Sub, "- z^2", 1)
        .charge(OperationKind::Sub, "- sumZ", 1)
        .charge(OperationKind::Sub, "- delta", 1)
        .charge(OperationKind::Sub, "- sab", 1);

    tally
        .charge_family(ExponentFamily::powers("y^i", mn))
        .charge_family(ExponentFamily::powers("2^i", mn))
        .charge_family(ExponentFamily::shifted("z^(2+j)", m, 2))
        .charge_exp("z^2, x^2", 2, 2);

    tally
        .charge(OperationKind::EccAdd, "+ stau*h", 1)
        .charge(OperationKind::EccAdd, "+ (c*x)*T1", 1)
        .charge(OperationKind::EccAdd, "+ (c*x^2)*T2", 1);

    tally
        .charge(OperationKind::EccMul, "* g", 1)
        .charge(OperationKind::EccMul, "* h", 1)
        .charge(OperationKind::EccMul, "* T1", 1)
        .charge(OperationKind::EccMul, "* T2", 1);

    tally.finish(Protocol::RangeProof)
}

/// Reconstruction of `P` from `A`, `S`, the challenges and `h' = h ∘ y^-mn`.
///
/// Each inner product of length `L` costs `L - 1` additions and `L`
/// multiplications; the enclosing scalar step adds one more of each.
pub fn range_ipa_arguments(variant: CostTableVariant, n: i64, m: i64) -> CostBreakdown {
    let mn = m * n;

    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::Add, "sumZ", m - 1)
        .charge(OperationKind::Div, "y^-mn", mn);

    tally
        .charge_family(ExponentFamily::powers("y^i", mn))
        .charge_family(ExponentFamily::powers("y^i (h')", mn))
        .charge_family(ExponentFamily::shifted("z^(1+j)", m, 1))
        .charge_family(ExponentFamily::powers("2^i", n));

    tally
        .charge(OperationKind::EccAdd, "+ x*S", 1)
        .charge(OperationKind::EccAdd, "<1^mn, g>", mn - 1)
        .charge(OperationKind::EccAdd, "- z*<1^mn, g>", 1)
        .charge(OperationKind::EccAdd, "<y^mn, h'>", mn - 1)
        .charge(OperationKind::EccAdd, "+ z*<y^mn, h'>", 1)
        .charge(OperationKind::EccAdd, "<2^n, h'>", n - 1)
        .charge(OperationKind::EccAdd, "+ sumZ*<2^n, h'>", 1)
        .charge(OperationKind::EccAdd, "- mu*h", 1);

    tally
        .charge(OperationKind::EccMul, "h o y^-1", mn)
        .charge(OperationKind::EccMul, "* S", 1)
        .charge(OperationKind::EccMul, "* <1^mn, g>", 1)
        .charge(OperationKind::EccMul, "<y^mn, h'>", mn)
        .charge(OperationKind::EccMul, "* <y^mn, h'>", 1)
        .charge(OperationKind::EccMul, "<2^n, h'>", n)
        .charge(OperationKind::EccMul, "* <2^n, h'>", 1)
        .charge(OperationKind::EccMul, "mu * h", 1)
        .charge(OperationKind::EccMul, "negate z", 1)
        .charge(OperationKind::EccMul, "negate mu", 1);

    tally.finish(Protocol::RangeIpaArguments)
}
