use super::CostModel;

// ─── EIP-1108 Cost Model ───────────────────────────────────────────

/// Reduced alt_bn128 precompile pricing (Istanbul).
pub struct Eip1108CostModel;

impl CostModel for Eip1108CostModel {
    fn name(&self) -> &'static str {
        "eip1108"
    }
    fn label(&self) -> &'static str {
        "EIP-1108"
    }

    fn ecc_add(&self) -> i64 {
        150
    }

    fn ecc_mul(&self) -> i64 {
        6_000
    }
}
