//! Inner-product argument verifiers.
//!
//! Protocol 1 binds the claimed inner product into the commitment and is a
//! fixed handful of curve operations. Protocol 2 is the recursive halving
//! argument over a vector of length `size`; it is costed either as the
//! round-by-round verifier (`normal`) or with the generators folded into a
//! single multi-exponentiation (`multiexp`).

use crate::cost::{ceil_to_int, log_base, CostBreakdown, CostTableVariant, OperationKind, Tally};
use crate::protocol::Protocol;

/// Exponent of the squared round challenges `u_j^2`, `u_j^-2`.
const ROUND_CHALLENGE_EXPONENT: i64 = 2;

fn log2(size: i64) -> f64 {
    log_base(2.0, size as f64)
}

/// `Σ_{i=1}^{rounds} 2^i`: generators touched while folding, over all rounds.
fn folded_generators(rounds: i64) -> i64 {
    (1..=rounds).map(|i| 1i64 << i).sum()
}

/// Protocol 1: `P' = P + c·u·x`.
pub fn protocol_one(variant: CostTableVariant) -> CostBreakdown {
    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::EccAdd, "P + c*u*x", 1)
        .charge(OperationKind::EccMul, "x * u", 1)
        .charge(OperationKind::EccMul, "c * (x*u)", 1)
        .charge(OperationKind::EccMul, "x * P", 1);
    tally.finish(Protocol::IpaProtocolOne)
}

/// Protocol 2, verified round by round. `size` must be positive.
pub fn protocol_two_normal(variant: CostTableVariant, size: i64) -> CostBreakdown {
    let log_size = log2(size);
    let rounds = ceil_to_int(log_size);
    let challenge_exps = ceil_to_int(2.0 * log_size);
    let folded = folded_generators(rounds);

    let mut tally = Tally::new(variant);
    tally
        .charge(OperationKind::Mul, "a * b", 1)
        .charge(OperationKind::Div, "u^-1 per round", ceil_to_int(3.0 * log_size))
        .charge_exp("u^2, u^-2 per round", challenge_exps, ROUND_CHALLENGE_EXPONENT)
        .charge(OperationKind::EccAdd, "P' final sums", 2)
        .charge(OperationKind::EccAdd, "L*u^2 + R*u^-2", challenge_exps)
        .charge(OperationKind::EccAdd, "g', h' folding", folded)
        .charge(OperationKind::EccMul, "a*g + b*h + ab*u", 3)
        // truncated, not rounded up
        .charge(OperationKind::EccMul, "u^2 * L, u^-2 * R", (2.0 * log_size) as i64)
        .charge(OperationKind::EccMul, "g', h' folding", 2 * folded);
    tally.finish(Protocol::IpaProtocolTwoNormal)
}

/// Protocol 2 with the generator folding done as one multi-exponentiation.
/// `size` must be positive.
pub fn protocol_two_multiexp(variant: CostTableVariant, size: i64) -> CostBreakdown {
    let log_size = log2(size);
    let challenge_exps = ceil_to_int(2.0 * log_size);

    let mut tally = Tally::new(variant);
    tally
        .charge(
            OperationKind::Mul,
            "a * b, s_i scalars",
            1 + ceil_to_int(size as f64 * (log_size - 1.0)),
        )
        .charge(
            OperationKind::Div,
            "u^-1 and s_i^-1",
            ceil_to_int(log_size + size as f64),
        )
        .charge_exp("u^2, u^-2 per round", challenge_exps, ROUND_CHALLENGE_EXPONENT)
        .charge(OperationKind::EccAdd, "<s, g> + <s^-1, h>", 2 * size)
        .charge(OperationKind::EccAdd, "L*u^2 + R*u^-2", challenge_exps)
        .charge(OperationKind::EccMul, "a*g + b*h + ab*u", 3)
        .charge(OperationKind::EccMul, "<s, g> + <s^-1, h>", 2 * size)
        .charge(OperationKind::EccMul, "u^2 * L, u^-2 * R", challenge_exps);
    tally.finish(Protocol::IpaProtocolTwoMultiexp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folded_generators() {
        assert_eq!(folded_generators(0), 0);
        assert_eq!(folded_generators(1), 2);
        assert_eq!(folded_generators(8), 510);
    }

    #[test]
    fn test_protocol_one_standard() {
        let b = protocol_one(CostTableVariant::Standard);
        assert_eq!(b.count(OperationKind::EccAdd), 1);
        assert_eq!(b.cost(OperationKind::EccAdd), 500);
        assert_eq!(b.count(OperationKind::EccMul), 3);
        assert_eq!(b.cost(OperationKind::EccMul), 120_000);
        assert_eq!(b.total(), 120_500);
    }

    #[test]
    fn test_protocol_one_optimized() {
        assert_eq!(protocol_one(CostTableVariant::Optimized).total(), 18_150);
    }

    #[test]
    fn test_protocol_two_normal_256() {
        let b = protocol_two_normal(CostTableVariant::Optimized, 256);
        assert_eq!(b.count(OperationKind::Mul), 1);
        assert_eq!(b.count(OperationKind::Div), 24);
        assert_eq!(b.count(OperationKind::Exp), 16);
        assert_eq!(b.cost(OperationKind::Exp), 340);
        assert_eq!(b.count(OperationKind::EccAdd), 528);
        assert_eq!(b.count(OperationKind::EccMul), 1039);
        assert_eq!(b.total(), 6_313_665);
    }

    #[test]
    fn test_protocol_two_normal_truncates_challenge_muls() {
        // 2 * log2(100) = 13.29: Exp and EccAdd round up, the challenge muls do not
        let b = protocol_two_normal(CostTableVariant::Optimized, 100);
        assert_eq!(b.count(OperationKind::Div), 20);
        assert_eq!(b.count(OperationKind::Exp), 14);
        assert_eq!(b.cost(OperationKind::Exp), 298);
        assert_eq!(b.count(OperationKind::EccAdd), 270);
        assert_eq!(b.count(OperationKind::EccMul), 524);
        let challenge_muls = b
            .item(OperationKind::EccMul)
            .unwrap()
            .terms
            .iter()
            .find(|t| t.label == "u^2 * L, u^-2 * R")
            .unwrap();
        assert_eq!(challenge_muls.count, 13);
        assert_eq!(b.total(), 3_184_903);
        assert_eq!(protocol_two_normal(CostTableVariant::Standard, 100).total(), 21_095_403);
    }

    #[test]
    fn test_protocol_two_normal_64() {
        let b = protocol_two_normal(CostTableVariant::Optimized, 64);
        assert_eq!(b.count(OperationKind::Div), 18);
        assert_eq!(b.count(OperationKind::Exp), 12);
        assert_eq!(b.cost(OperationKind::Exp), 255);
        assert_eq!(b.count(OperationKind::EccAdd), 140);
        assert_eq!(b.count(OperationKind::EccMul), 267);
    }

    #[test]
    fn test_protocol_two_multiexp_256() {
        let b = protocol_two_multiexp(CostTableVariant::Standard, 256);
        assert_eq!(b.count(OperationKind::Mul), 1793);
        assert_eq!(b.count(OperationKind::Div), 264);
        assert_eq!(b.count(OperationKind::Exp), 16);
        assert_eq!(b.count(OperationKind::EccAdd), 528);
        assert_eq!(b.count(OperationKind::EccMul), 531);
        assert_eq!(b.total(), 21_514_625);
    }

    #[test]
    fn test_protocol_two_single_element() {
        // log2(1) = 0: no rounds
        let normal = protocol_two_normal(CostTableVariant::Optimized, 1);
        assert_eq!(normal.count(OperationKind::Div), 0);
        assert_eq!(normal.count(OperationKind::EccAdd), 2);
        assert_eq!(normal.count(OperationKind::EccMul), 3);
        assert_eq!(normal.total(), 18_305);

        let multiexp = protocol_two_multiexp(CostTableVariant::Optimized, 1);
        assert_eq!(multiexp.count(OperationKind::Mul), 0);
        assert_eq!(multiexp.count(OperationKind::Div), 1);
        assert_eq!(multiexp.count(OperationKind::EccMul), 5);
    }

    #[test]
    fn test_multiexp_cheaper_for_large_vectors() {
        for variant in CostTableVariant::ALL {
            let normal = protocol_two_normal(variant, 256).total();
            let multiexp = protocol_two_multiexp(variant, 256).total();
            assert!(multiexp < normal, "{variant}: {multiexp} >= {normal}");
        }
    }
}
