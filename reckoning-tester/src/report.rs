//! Report rendering for console and JSON output.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::runner::{RunPlan, SeedReport};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    plan: &'a RunPlan,
    results: &'a [SeedReport],
    passed: bool,
}

/// Render the sweep as pretty-printed JSON.
pub fn render_json(plan: &RunPlan, reports: &[SeedReport]) -> Result<String> {
    let passed = reports.iter().all(SeedReport::passed);
    let mut body = serde_json::to_string_pretty(&JsonReport {
        plan,
        results: reports,
        passed,
    })?;
    body.push('\n');
    Ok(body)
}

/// Render the sweep as a colored console summary.
#[must_use]
pub fn render_console(plan: &RunPlan, reports: &[SeedReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Reckoning simulation sweep: {} seed(s) x {} frames @ {:.4}s\n",
        reports.len(),
        plan.frames,
        plan.delta
    ));

    for report in reports {
        let status = if report.passed() {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        out.push_str(&format!(
            "  [{status}] seed {:<20} day {:>3} {} ({}) | weather {:<5} | re-rolls {:>4} draws {:>5}\n",
            report.seed,
            report.final_day,
            report.final_clock,
            report.final_phase,
            report.final_weather.as_str(),
            report.rerolls,
            report.draws,
        ));
        if !report.replay_identical {
            out.push_str(&format!("      {}\n", "replay diverged".red()));
        }
        for violation in &report.violations {
            out.push_str(&format!("      {} {violation}\n", "violation:".red()));
        }
    }

    let failures = reports.iter().filter(|r| !r.passed()).count();
    if failures == 0 {
        out.push_str(&format!("{}\n", "All seeds passed".green()));
    } else {
        out.push_str(&format!(
            "{}\n",
            format!("{failures} seed(s) failed").red()
        ));
    }
    out
}
