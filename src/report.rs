//! Human-readable and JSON renderings of cost breakdowns.
//!
//! Rendering is kept apart from the calculators: nothing in `cost` or
//! `protocol` prints.

use serde::Serialize;

use crate::cost::{CostBreakdown, LineItem};
use crate::scenario::ScenarioResult;

const SECTION_RULE: &str =
    "--------------------------------------------------------------------------------------------";
const SCENARIO_RULE: &str =
    "############################################################################################";

// ─── Number formatting ───────────────────────────────────────────

/// Format an integer with comma thousands separators: `-1234567` -> `-1,234,567`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ─── Text report ───────────────────────────────────────────────────

fn push_item(out: &mut String, item: &LineItem, verbose: bool) {
    out.push_str(&format!(
        "{} - Op: {} - Cost: {}\n",
        item.kind,
        group_digits(item.count),
        group_digits(item.cost)
    ));
    if verbose {
        for term in &item.terms {
            out.push_str(&format!(
                "    {} - Op: {} - Cost: {}\n",
                term.label,
                group_digits(term.count),
                group_digits(term.cost)
            ));
        }
    }
}

/// One protocol section: title, one line per operation kind, total, rule.
///
/// With `verbose`, every term is listed under its operation kind.
pub fn render_breakdown(breakdown: &CostBreakdown, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} - {}\n",
        breakdown.protocol().title(),
        breakdown.variant()
    ));
    for item in breakdown.items() {
        push_item(&mut out, item, verbose);
    }
    out.push_str(&format!("TOTAL: {}\n", group_digits(breakdown.total())));
    out.push_str(SECTION_RULE);
    out.push('\n');
    out
}

/// All sections of one scenario followed by its grand total.
pub fn render_scenario(result: &ScenarioResult, verbose: bool) -> String {
    let mut out = String::new();
    for breakdown in &result.breakdowns {
        out.push_str(&render_breakdown(breakdown, verbose));
    }
    out.push_str(&format!(
        "TOTAL {}: {}\n",
        result.scenario.label(),
        group_digits(result.total)
    ));
    out.push_str(SCENARIO_RULE);
    out.push('\n');
    out
}

/// Full comparison report, headed by the proof-size parameters.
pub fn render_scenarios(results: &[ScenarioResult], verbose: bool) -> String {
    let mut out = String::new();
    if let Some(first) = results.first() {
        out.push_str(&format!(
            "n: {} - m: {}\n",
            group_digits(first.n as i64),
            group_digits(first.m as i64)
        ));
        out.push_str(SCENARIO_RULE);
        out.push('\n');
    }
    for result in results {
        out.push_str(&render_scenario(result, verbose));
    }
    out
}

/// One line per scenario: label and grand total.
pub fn render_totals(results: &[ScenarioResult]) -> String {
    let width = results
        .iter()
        .map(|r| r.scenario.label().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for result in results {
        out.push_str(&format!(
            "{:<width$}  {:>14}\n",
            result.scenario.label(),
            group_digits(result.total),
            width = width
        ));
    }
    out
}

// ─── JSON ──────────────────────────────────────────────────────────

/// Pretty-printed JSON for any report value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
