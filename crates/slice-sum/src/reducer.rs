//! Fork/join reduction
//!
//! Spawns one worker per planned slice, joins all of them, then folds the
//! partial sums in slice order. Nothing reads a partial sum before every
//! worker has been joined.

use crate::{
    Wide,
    constants::LOG_TARGET,
    error::Result,
    planner::{SliceRange, plan_slices},
    worker::{Worker, spawn_worker},
};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// Outcome of one parallel reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Slices used, in index order
    pub slices: Vec<SliceRange>,
    /// Partial sum of each slice, `partials[i]` belongs to `slices[i]`
    pub partials: Vec<Wide>,
    /// Left-to-right fold of `partials`
    pub total: Wide,
    /// Wall time from first spawn to the end of the fold
    pub elapsed: Duration,
}

impl Reduction {
    /// Number of workers that were spawned
    pub fn workers(&self) -> usize {
        self.slices.len()
    }
}

/// Fold partial sums left to right.
pub fn fold_partials(partials: &[Wide]) -> Wide {
    partials.iter().fold(Wide::ZERO, |acc, &p| acc + p)
}

/// Sum `data` with one OS thread per slice.
///
/// With an empty dataset or `n_slices == 0` no thread is spawned and the total
/// is zero.
pub fn parallel_sum(data: Arc<[i64]>, n_slices: usize) -> Result<Reduction> {
    let started = Instant::now();
    let slices = plan_slices(data.len(), n_slices);

    if slices.is_empty() {
        return Ok(Reduction {
            slices,
            partials: Vec::new(),
            total: Wide::ZERO,
            elapsed: started.elapsed(),
        });
    }

    tracing::info!(
        target: LOG_TARGET,
        elements = data.len(),
        requested = n_slices,
        slices = slices.len(),
        "Spawning slice workers"
    );

    // Spawn everything before joining anything.
    let workers = slices
        .iter()
        .map(|&slice| spawn_worker(Arc::clone(&data), slice))
        .collect::<Result<Vec<Worker>>>()?;

    let mut partials = vec![Wide::ZERO; slices.len()];
    for worker in workers {
        let index = worker.slice().index;
        partials[index] = worker.join()?;
    }

    let total = fold_partials(&partials);
    let elapsed = started.elapsed();

    tracing::info!(
        target: LOG_TARGET,
        %total,
        elapsed_ms = elapsed.as_millis() as u64,
        "Parallel reduction finished"
    );

    Ok(Reduction { slices, partials, total, elapsed })
}
