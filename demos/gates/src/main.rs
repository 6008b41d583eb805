//! gates — run the gate-bank breakdown model over a handful of seeds.
//!
//! Usage:
//!
//! ```text
//! gates [config.json]
//! ```
//!
//! Without an argument the built-in defaults are used (100 000 passengers,
//! 10 gates, 5 % break chance, 120-unit repairs, 15-unit processing).  A JSON
//! file may override any subset of `SimulationConfig` fields, e.g.
//!
//! ```json
//! { "gate_count": 12, "variant": "event_driven", "repair_model": "jittered" }
//! ```
//!
//! Set `RUST_LOG=gs_sim=debug` (or `trace`) to watch the loop.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gs_core::SimulationConfig;
use gs_sim::{DenseRecord, PercentileSampler, SparseRecord, run_dense, run_seeds};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEEDS:          [u64; 8] = [100, 101, 102, 103, 104, 105, 106, 107];
const CURVE_STEP_PCT: usize    = 10;

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimulationConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimulationConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: SimulationConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn fmt_time(record: &SparseRecord, pct: u8) -> String {
    record
        .time_to(pct)
        .map(|t| t.0.to_string())
        .unwrap_or_else(|| "-".to_owned())
}

fn fmt_ratio(ratio: Option<f64>) -> String {
    ratio.map(|r| format!("{r:.3}")).unwrap_or_else(|| "-".to_owned())
}

fn print_curve(record: &DenseRecord) {
    println!("{:>6} {:>12}", "pct", "time");
    println!("{}", "-".repeat(19));
    for (pct, slot) in record.slots().iter().enumerate().step_by(CURVE_STEP_PCT) {
        let time = slot.map(|t| t.0.to_string()).unwrap_or_else(|| "-".to_owned());
        println!("{pct:>5}% {time:>12}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    config.validate()?;

    println!("=== gates — breakdown-aware throughput ===");
    println!(
        "Passengers: {}  |  Gates: {}  |  Break chance: {}  |  Repair: {} ({:?})  |  Processing: {} ({:?})  |  Variant: {:?}",
        config.passenger_count,
        config.gate_count,
        config.break_chance,
        config.mean_repair_time,
        config.repair_model,
        config.mean_processing_time,
        config.processing_model,
        config.variant,
    );
    println!();

    // 1. Headline percentiles, one independent run per seed.
    let t0 = Instant::now();
    let results = run_seeds(&config, &SEEDS, SparseRecord::standard);
    info!(runs = SEEDS.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "seed sweep finished");

    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>9} {:>9}",
        "seed", "t50", "t95", "t99", "t95/t50", "t99/t50"
    );
    println!("{}", "-".repeat(61));
    for (seed, result) in SEEDS.iter().zip(&results) {
        match result {
            Ok(record) => {
                let ratios = record.tail_ratios();
                println!(
                    "{:<8} {:>10} {:>10} {:>10} {:>9} {:>9}",
                    seed,
                    fmt_time(record, 50),
                    fmt_time(record, 95),
                    fmt_time(record, 99),
                    fmt_ratio(ratios.p95),
                    fmt_ratio(ratios.p99),
                );
            }
            Err(e) => println!("{seed:<8} error: {e}"),
        }
    }
    println!();

    // 2. Full completion curve for the configured seed.
    let dense = run_dense(&config).context("dense run")?;
    println!("Completion curve (seed {}):", config.seed);
    print_curve(&dense);

    Ok(())
}
