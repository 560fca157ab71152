use super::CostModel;

// ─── EIP-196 Cost Model ────────────────────────────────────────────

/// alt_bn128 precompile pricing as introduced in Byzantium.
pub struct Eip196CostModel;

impl CostModel for Eip196CostModel {
    fn name(&self) -> &'static str {
        "eip196"
    }
    fn label(&self) -> &'static str {
        "EIP-196"
    }

    fn ecc_add(&self) -> i64 {
        500
    }

    fn ecc_mul(&self) -> i64 {
        40_000
    }
}
