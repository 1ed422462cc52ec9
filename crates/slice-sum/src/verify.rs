//! Sequential verification of the parallel total

use crate::{
    Wide,
    constants::LOG_TARGET,
    error::{Result, SliceSumError},
    utils::widen,
};
use std::time::{Duration, Instant};

/// Sum every element of `data` on the calling thread.
pub fn sequential_sum(data: &[i64]) -> Wide {
    data.iter().fold(Wide::ZERO, |acc, &v| acc + widen(v))
}

/// [`sequential_sum`] together with its wall time
pub fn timed_sequential_sum(data: &[i64]) -> (Wide, Duration) {
    let started = Instant::now();
    let total = sequential_sum(data);
    (total, started.elapsed())
}

/// Check that the parallel total equals the sequential one.
pub fn verify_totals(parallel: Wide, sequential: Wide) -> Result<()> {
    if parallel == sequential {
        return Ok(());
    }

    tracing::error!(
        target: LOG_TARGET,
        %parallel,
        %sequential,
        "Parallel total does not match sequential total"
    );
    Err(SliceSumError::Mismatch { parallel, sequential })
}
