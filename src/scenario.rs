//! Whole-proof estimates: every sub-protocol of one construction priced
//! under one cost table and summed.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::cost::{CostBreakdown, CostTableVariant};
use crate::error::Result;
use crate::protocol::{calculate, Mode, Protocol, ProtocolParameters};

/// How the protocol-2 inner-product verifier is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Construction {
    Normal,
    Multiexp,
}

impl Construction {
    pub fn ipa_protocol(self) -> Protocol {
        match self {
            Construction::Normal => Protocol::IpaProtocolTwoNormal,
            Construction::Multiexp => Protocol::IpaProtocolTwoMultiexp,
        }
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construction::Normal => f.write_str("Normal"),
            Construction::Multiexp => f.write_str("Multiexp"),
        }
    }
}

/// A cost table paired with an inner-product construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Scenario {
    pub variant: CostTableVariant,
    pub construction: Construction,
}

impl Scenario {
    pub fn new(variant: CostTableVariant, construction: Construction) -> Self {
        Self {
            variant,
            construction,
        }
    }

    /// The four scenarios compared by default, cheapest table first.
    pub fn comparison_set() -> [Scenario; 4] {
        [
            Scenario::new(CostTableVariant::Optimized, Construction::Normal),
            Scenario::new(CostTableVariant::Optimized, Construction::Multiexp),
            Scenario::new(CostTableVariant::Standard, Construction::Normal),
            Scenario::new(CostTableVariant::Standard, Construction::Multiexp),
        ]
    }

    /// Sub-protocols of a full proof, in report order.
    pub fn protocols(&self) -> [Protocol; 8] {
        [
            Protocol::IpaProtocolOne,
            self.construction.ipa_protocol(),
            Protocol::RangeProof,
            Protocol::RangeIpaArguments,
            Protocol::SigmaSk,
            Protocol::SigmaR,
            Protocol::SigmaAb,
            Protocol::SigmaY,
        ]
    }

    /// "EIP 1108 Normal", "EIP 196 Multiexp", ...
    pub fn label(&self) -> String {
        let eip = match self.variant {
            CostTableVariant::Standard => "EIP 196",
            CostTableVariant::Optimized => "EIP 1108",
        };
        format!("{} {}", eip, self.construction)
    }

    /// Price every sub-protocol for proofs of `m` aggregated `n`-bit values.
    pub fn evaluate(&self, n: u32, m: u32, mode: Mode) -> Result<ScenarioResult> {
        let params = ProtocolParameters::new(n, m, self.variant)?.with_mode(mode);
        let breakdowns = self
            .protocols()
            .par_iter()
            .map(|protocol| calculate(*protocol, &params))
            .collect::<Result<Vec<_>>>()?;
        let total = breakdowns.iter().map(CostBreakdown::total).sum();
        info!(scenario = %self.label(), n, m, total, "evaluated scenario");
        Ok(ScenarioResult {
            scenario: *self,
            n,
            m,
            breakdowns,
            total,
        })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Breakdowns of one scenario and their grand total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub n: u32,
    pub m: u32,
    pub breakdowns: Vec<CostBreakdown>,
    pub total: i64,
}

impl ScenarioResult {
    pub fn breakdown(&self, protocol: Protocol) -> Option<&CostBreakdown> {
        self.breakdowns.iter().find(|b| b.protocol() == protocol)
    }
}

/// Evaluate several scenarios in parallel, keeping their order.
pub fn evaluate_all(scenarios: &[Scenario], n: u32, m: u32, mode: Mode) -> Result<Vec<ScenarioResult>> {
    scenarios
        .par_iter()
        .map(|scenario| scenario.evaluate(n, m, mode))
        .collect()
}
