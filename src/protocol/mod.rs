//! Operation-count formulas for each verifier sub-protocol.
//!
//! Each calculator charges one term per algebraic step of the verifier and
//! returns the frozen [`CostBreakdown`]. The calculators are pure; only
//! [`calculate`] validates parameters.

pub mod ipa;
pub mod range;
pub mod sigma;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

pub use ipa::{protocol_one, protocol_two_multiexp, protocol_two_normal};
pub use range::{range_ipa_arguments, range_proof};
pub use sigma::{sigma_ab, sigma_r, sigma_sk, sigma_y};

use crate::cost::{CostBreakdown, CostTableVariant};
use crate::error::{CostError, Result};

/// The sub-protocols a full proof is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    IpaProtocolOne,
    IpaProtocolTwoNormal,
    IpaProtocolTwoMultiexp,
    RangeProof,
    RangeIpaArguments,
    SigmaSk,
    SigmaR,
    SigmaAb,
    SigmaY,
}

impl Protocol {
    pub const ALL: [Protocol; 9] = [
        Protocol::IpaProtocolOne,
        Protocol::IpaProtocolTwoNormal,
        Protocol::IpaProtocolTwoMultiexp,
        Protocol::RangeProof,
        Protocol::RangeIpaArguments,
        Protocol::SigmaSk,
        Protocol::SigmaR,
        Protocol::SigmaAb,
        Protocol::SigmaY,
    ];

    /// Section title used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Protocol::IpaProtocolOne => "Inner Product Argument - Protocol 1",
            Protocol::IpaProtocolTwoNormal => "Inner Product Argument - Protocol 2 (Normal)",
            Protocol::IpaProtocolTwoMultiexp => "Inner Product Argument - Protocol 2 (Multiexp)",
            Protocol::RangeProof => "Aggregated Range Proof",
            Protocol::RangeIpaArguments => "Range-IPA Arguments",
            Protocol::SigmaSk => "Sigma SK",
            Protocol::SigmaR => "Sigma R",
            Protocol::SigmaAb => "Sigma AB",
            Protocol::SigmaY => "Sigma Y",
        }
    }

    /// Command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            Protocol::IpaProtocolOne => "ipa-1",
            Protocol::IpaProtocolTwoNormal => "ipa-2",
            Protocol::IpaProtocolTwoMultiexp => "ipa-2-multiexp",
            Protocol::RangeProof => "range",
            Protocol::RangeIpaArguments => "range-ipa",
            Protocol::SigmaSk => "sigma-sk",
            Protocol::SigmaR => "sigma-r",
            Protocol::SigmaAb => "sigma-ab",
            Protocol::SigmaY => "sigma-y",
        }
    }

    /// Smallest `m` for which every count of this protocol is non-negative.
    pub fn min_aggregation(self) -> u32 {
        match self {
            Protocol::SigmaAb | Protocol::SigmaY => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Protocol {
    type Err = CostError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Protocol::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| CostError::UnknownProtocol(s.to_string()))
    }
}

/// How to treat aggregation sizes the formulas were not written for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Price whatever the formulas produce, including negative counts.
    #[default]
    Permissive,
    /// Reject `m` below a protocol's [`Protocol::min_aggregation`].
    Strict,
}

/// Largest accepted aggregated vector length `n * m`.
///
/// Keeps every operation count and cost within `i64`, and the per-exponent
/// pricing of the `y^i` families bounded.
pub const MAX_AGGREGATE_SIZE: u64 = 1 << 24;

/// Proof-size parameters and the cost table to price with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProtocolParameters {
    n: u32,
    m: u32,
    variant: CostTableVariant,
    mode: Mode,
}

impl ProtocolParameters {
    /// `n` is the secret vector length (range bit-width), `m` the number of
    /// aggregated statements. Both must be positive and `n * m` may not
    /// exceed [`MAX_AGGREGATE_SIZE`].
    pub fn new(n: u32, m: u32, variant: CostTableVariant) -> Result<Self> {
        if n == 0 {
            return Err(CostError::InvalidParameter {
                name: "n",
                value: 0,
                reason: "vector length must be positive",
            });
        }
        if m == 0 {
            return Err(CostError::InvalidParameter {
                name: "m",
                value: 0,
                reason: "aggregation size must be positive",
            });
        }
        let size = u64::from(n) * u64::from(m);
        if size > MAX_AGGREGATE_SIZE {
            return Err(CostError::InvalidParameter {
                name: "n * m",
                value: i64::try_from(size).unwrap_or(i64::MAX),
                reason: "aggregated vector length exceeds 2^24",
            });
        }
        Ok(Self {
            n,
            m,
            variant,
            mode: Mode::Permissive,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_variant(mut self, variant: CostTableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn n(&self) -> i64 {
        self.n as i64
    }

    pub fn m(&self) -> i64 {
        self.m as i64
    }

    /// Length of the aggregated vector, `n * m`.
    pub fn aggregate_size(&self) -> i64 {
        self.n() * self.m()
    }

    pub fn variant(&self) -> CostTableVariant {
        self.variant
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Price `protocol` for the given parameters.
///
/// The inner-product argument of protocol 2 runs over the aggregated vector,
/// so it is sized by `n * m`.
pub fn calculate(protocol: Protocol, params: &ProtocolParameters) -> Result<CostBreakdown> {
    if params.mode == Mode::Strict && params.m < protocol.min_aggregation() {
        return Err(CostError::InvalidParameter {
            name: "m",
            value: params.m(),
            reason: "protocol aggregates at least two statements",
        });
    }

    let variant = params.variant;
    let breakdown = match protocol {
        Protocol::IpaProtocolOne => protocol_one(variant),
        Protocol::IpaProtocolTwoNormal => protocol_two_normal(variant, params.aggregate_size()),
        Protocol::IpaProtocolTwoMultiexp => {
            protocol_two_multiexp(variant, params.aggregate_size())
        }
        Protocol::RangeProof => range_proof(variant, params.n(), params.m()),
        Protocol::RangeIpaArguments => range_ipa_arguments(variant, params.n(), params.m()),
        Protocol::SigmaSk => sigma_sk(variant),
        Protocol::SigmaR => sigma_r(variant),
        Protocol::SigmaAb => sigma_ab(variant, params.m()),
        Protocol::SigmaY => sigma_y(variant, params.m()),
    };

    if breakdown.has_negative_counts() {
        warn!(
            protocol = protocol.slug(),
            m = params.m,
            "negative operation count priced; formulas assume m >= {}",
            protocol.min_aggregation()
        );
    }
    debug!(
        protocol = protocol.slug(),
        table = variant.model().name(),
        n = params.n,
        m = params.m,
        total = breakdown.total(),
        "calculated protocol cost"
    );
    Ok(breakdown)
}
