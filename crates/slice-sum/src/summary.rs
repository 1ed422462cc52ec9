//! End-to-end run and its report

use crate::{
    Wide,
    config::Config,
    constants::LOG_TARGET,
    dataset::Dataset,
    error::Result,
    reducer::{Reduction, parallel_sum},
    utils::speedup,
    verify::{timed_sequential_sum, verify_totals},
};
use serde::Serialize;
use std::time::Duration;

/// Result of one generate, reduce and recompute cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of elements reduced
    pub elements: usize,
    /// Slice count asked for
    pub requested_slices: usize,
    /// Parallel pass outcome
    pub reduction: Reduction,
    /// Total recomputed on the calling thread
    pub sequential_total: Wide,
    /// Wall time of the sequential pass
    pub sequential_elapsed: Duration,
}

impl Summary {
    /// Whether the parallel and sequential totals agree
    pub fn matches(&self) -> bool {
        self.reduction.total == self.sequential_total
    }

    /// Sequential over parallel wall time, if any worker ran and it is measurable
    pub fn speedup(&self) -> Option<f64> {
        if self.reduction.workers() == 0 {
            return None;
        }
        speedup(self.sequential_elapsed, self.reduction.elapsed)
    }

    /// Fail with [`crate::SliceSumError::Mismatch`] if the totals disagree
    pub fn verify(&self) -> Result<()> {
        verify_totals(self.reduction.total, self.sequential_total)
    }

    /// Serializable view, totals rendered as decimal strings
    pub fn report(&self) -> Report {
        Report {
            elements: self.elements,
            requested_slices: self.requested_slices,
            slices: self.reduction.workers(),
            parallel_total: self.reduction.total.to_string(),
            sequential_total: self.sequential_total.to_string(),
            partials: self.reduction.partials.iter().map(ToString::to_string).collect(),
            parallel_ms: self.reduction.elapsed.as_secs_f64() * 1000.0,
            sequential_ms: self.sequential_elapsed.as_secs_f64() * 1000.0,
            speedup: self.speedup(),
            matches: self.matches(),
        }
    }
}

/// JSON-friendly form of a [`Summary`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    /// Number of elements reduced
    pub elements: usize,
    /// Slice count asked for
    pub requested_slices: usize,
    /// Slice count actually used
    pub slices: usize,
    /// Parallel total
    pub parallel_total: String,
    /// Sequential total
    pub sequential_total: String,
    /// Partial sum per slice, in slice order
    pub partials: Vec<String>,
    /// Parallel pass wall time in milliseconds
    pub parallel_ms: f64,
    /// Sequential pass wall time in milliseconds
    pub sequential_ms: f64,
    /// Sequential over parallel wall time
    pub speedup: Option<f64>,
    /// Whether both totals agree
    pub matches: bool,
}

/// Reduce an existing dataset in parallel and recompute it sequentially.
///
/// A zero slice count reduces nothing by definition, so the sequential pass
/// then covers no elements either and both totals are zero.
pub fn summarize(data: &Dataset, n_slices: usize) -> Result<Summary> {
    let reduction = parallel_sum(data.share(), n_slices)?;
    let covered = if n_slices == 0 { &data[..0] } else { &data[..] };
    let (sequential_total, sequential_elapsed) = timed_sequential_sum(covered);

    tracing::info!(
        target: LOG_TARGET,
        total = %sequential_total,
        elapsed_ms = sequential_elapsed.as_millis() as u64,
        "Sequential recomputation finished"
    );

    Ok(Summary {
        elements: data.len(),
        requested_slices: n_slices,
        reduction,
        sequential_total,
        sequential_elapsed,
    })
}

/// Generate the configured dataset and [`summarize`] it.
pub fn run(config: &Config) -> Result<Summary> {
    tracing::info!(
        target: LOG_TARGET,
        len = config.len,
        pattern = config.pattern.as_str(),
        seed = config.seed,
        "Generating dataset"
    );
    let data = Dataset::generate(config.pattern, config.len, config.modulus, config.seed);
    summarize(&data, config.slices)
}
