use clap::Args;
use zkgas::report::{render_scenarios, render_totals, to_json};
use zkgas::scenario::{evaluate_all, Scenario, ScenarioResult};

use super::{emit, fail, OutputArgs, OutputFormat, SizeArgs};

#[derive(Args, Clone, Debug, Default)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub size: SizeArgs,
    #[command(flatten)]
    pub out: OutputArgs,
    /// Print only the grand total of each scenario
    #[arg(long)]
    pub totals: bool,
}

pub fn evaluate(size: &SizeArgs) -> zkgas::Result<Vec<ScenarioResult>> {
    evaluate_all(&Scenario::comparison_set(), size.n, size.m, size.mode())
}

pub fn render(args: &ScenariosArgs, results: &[ScenarioResult]) -> Result<String, String> {
    match args.out.format {
        OutputFormat::Json => to_json(results)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| format!("cannot serialise report: {}", e)),
        OutputFormat::Text if args.totals => Ok(render_totals(results)),
        OutputFormat::Text => Ok(render_scenarios(results, args.out.verbose)),
    }
}

pub fn cmd_scenarios(args: ScenariosArgs) {
    let results = match evaluate(&args.size) {
        Ok(r) => r,
        Err(e) => fail(e),
    };
    let report = match render(&args, &results) {
        Ok(r) => r,
        Err(e) => fail(e),
    };
    emit(&report, args.out.output.as_deref());
}
