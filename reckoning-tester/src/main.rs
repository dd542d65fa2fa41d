mod report;
mod runner;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::io::{Write, stdout};
use std::path::PathBuf;

use reckoning_sim::parse_seed;
use report::{render_console, render_json};
use runner::{RunPlan, run_seed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Colored per-seed summary on the console
    Console,
    /// Machine-readable sweep report
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "reckoning-tester", version)]
#[command(about = "Headless QA frame driver for the Rivers of Reckoning simulation core")]
struct Args {
    /// Seeds to run (comma-separated integers, or the keyword `clock`)
    #[arg(long, default_value = "42,1337")]
    seeds: String,

    /// Additionally sample this many seeds from OS entropy
    #[arg(long, default_value_t = 0)]
    random_seeds: usize,

    /// Frames to simulate per seed
    #[arg(long, default_value_t = 36_000)]
    frames: u32,

    /// Fixed per-frame delta in real seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose per-seed progress
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_seeds(args: &Args) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for token in args.seeds.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let seed =
            parse_seed(token).with_context(|| format!("invalid seed argument `{token}`"))?;
        seeds.push(seed);
    }

    if args.random_seeds > 0 {
        let mut entropy = SmallRng::from_entropy();
        seeds.extend((0..args.random_seeds).map(|_| entropy.next_u64()));
    }

    if seeds.is_empty() {
        bail!("no seeds to run");
    }
    Ok(seeds)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seeds = resolve_seeds(&args)?;
    let plan = RunPlan {
        frames: args.frames,
        delta: args.delta,
    };

    let mut reports = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if args.verbose {
            log::info!("running seed {seed} for {} frames", plan.frames);
        }
        let report = run_seed(seed, &plan);
        if args.verbose {
            log::info!(
                "seed {seed}: {} re-rolls, {} violation(s)",
                report.rerolls,
                report.violations.len()
            );
        }
        reports.push(report);
    }

    let rendered = match args.report {
        ReportFormat::Console => render_console(&plan, &reports),
        ReportFormat::Json => render_json(&plan, &reports)?,
    };
    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("write report to {}", path.display()))?,
        None => stdout().write_all(rendered.as_bytes())?,
    }

    let failed: Vec<u64> = reports
        .iter()
        .filter(|report| !report.passed())
        .map(|report| report.seed)
        .collect();
    if !failed.is_empty() {
        bail!("invariant violations for seed(s) {failed:?}");
    }
    Ok(())
}
