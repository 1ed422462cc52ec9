//! Parallel slice summation demo
//!
//! Sums 2,000,000 values of `i % 1000` with one thread per available core,
//! then checks the result against a single-threaded recomputation. Exits
//! non-zero if the two totals differ.

use anyhow::Result;
use slice_sum::{Config, OutputFormat, Summary, run};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        len = config.len,
        slices = config.slices,
        pattern = config.pattern.as_str(),
        "Configuration loaded"
    );

    let summary = run(&config)?;
    match config.output {
        OutputFormat::Text => print_text(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary.report())?),
    }

    summary.verify()?;
    Ok(())
}

fn print_text(summary: &Summary) {
    let reduction = &summary.reduction;
    println!("Using {} threads / slices", reduction.workers());
    println!("Total sum is {}", reduction.total);
    println!("Elapsed time is {} ms", reduction.elapsed.as_millis());
    println!("Total sum check is {}", summary.sequential_total);
    println!("Elapsed time is {} ms", summary.sequential_elapsed.as_millis());
    if reduction.workers() > 0
        && let Some(ratio) = summary.speedup()
    {
        println!("Speedup is {ratio:.2}x");
    }
}
