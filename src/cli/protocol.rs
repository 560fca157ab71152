use clap::Args;
use zkgas::report::{render_breakdown, to_json};
use zkgas::{calculate, CostBreakdown, CostTableVariant, Protocol, ProtocolParameters};

use super::{emit, fail, OutputArgs, OutputFormat, SizeArgs};

#[derive(Args, Clone, Debug)]
pub struct ProtocolArgs {
    /// Sub-protocol to price (see `zkgas list`)
    pub protocol: Protocol,
    /// Cost table: standard (EIP-196) or optimized (EIP-1108)
    #[arg(short, long, default_value = "standard")]
    pub table: CostTableVariant,
    #[command(flatten)]
    pub size: SizeArgs,
    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn evaluate(args: &ProtocolArgs) -> zkgas::Result<CostBreakdown> {
    let params = ProtocolParameters::new(args.size.n, args.size.m, args.table)?
        .with_mode(args.size.mode());
    calculate(args.protocol, &params)
}

pub fn render(args: &ProtocolArgs, breakdown: &CostBreakdown) -> Result<String, String> {
    match args.out.format {
        OutputFormat::Json => to_json(breakdown)
            .map(|json| json + "\n")
            .map_err(|e| format!("cannot serialise report: {}", e)),
        OutputFormat::Text => Ok(render_breakdown(breakdown, args.out.verbose)),
    }
}

pub fn cmd_protocol(args: ProtocolArgs) {
    let breakdown = match evaluate(&args) {
        Ok(b) => b,
        Err(e) => fail(e),
    };
    let report = match render(&args, &breakdown) {
        Ok(r) => r,
        Err(e) => fail(e),
    };
    emit(&report, args.out.output.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(protocol: Protocol, table: CostTableVariant) -> ProtocolArgs {
        ProtocolArgs {
            protocol,
            table,
            size: SizeArgs::default(),
            out: OutputArgs::default(),
        }
    }

    #[test]
    fn test_ipa_one_report() {
        let a = args(Protocol::IpaProtocolOne, CostTableVariant::Standard);
        let report = render(&a, &evaluate(&a).unwrap()).unwrap();
        assert!(report.starts_with("Inner Product Argument - Protocol 1 - EIP-196\n"));
        assert!(report.contains("TOTAL: 120,500\n"));
    }

    #[test]
    fn test_ipa_two_uses_aggregate_size() {
        let a = args(Protocol::IpaProtocolTwoMultiexp, CostTableVariant::Optimized);
        assert_eq!(evaluate(&a).unwrap().total(), 3_275_825);
    }

    #[test]
    fn test_zero_bits_rejected() {
        let mut a = args(Protocol::RangeProof, CostTableVariant::Standard);
        a.size.n = 0;
        assert!(evaluate(&a).is_err());
    }

    #[test]
    fn test_json_format() {
        let mut a = args(Protocol::SigmaR, CostTableVariant::Optimized);
        a.out.format = OutputFormat::Json;
        let json = render(&a, &evaluate(&a).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["protocol"], "sigma-r");
        assert_eq!(value["total"], 12_150);
    }
}
