//! Gas-cost estimates for the verifier side of an aggregated range proof
//! (inner-product arguments, range check, sigma protocols) under the EIP-196
//! and EIP-1108 precompile prices.

pub mod cost;
pub mod error;
pub mod protocol;
pub mod report;
pub mod scenario;

pub use cost::{
    ceil_to_int, exp_cost, log_base, price, CostBreakdown, CostModel, CostTableVariant,
    ExponentFamily, LineItem, OperationKind, Term,
};
pub use error::{CostError, Result};
pub use protocol::{
    calculate, protocol_one, protocol_two_multiexp, protocol_two_normal, range_ipa_arguments,
    range_proof, sigma_ab, sigma_r, sigma_sk, sigma_y, Mode, Protocol, ProtocolParameters,
    MAX_AGGREGATE_SIZE,
};
pub use scenario::{evaluate_all, Construction, Scenario, ScenarioResult};
