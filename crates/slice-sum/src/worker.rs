//! Per-slice workers
//!
//! Each worker owns one [`SliceRange`] by value and a shared handle to the
//! read-only dataset. Its partial sum is handed back through the join handle,
//! which acts as the write-once slot for that slice.

use crate::{
    Wide,
    constants::{LOG_TARGET, WORKER_THREAD_PREFIX},
    error::{Result, SliceSumError},
    planner::SliceRange,
    utils::widen,
};
use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

/// Sum the elements of `data` covered by `slice` into a wide accumulator.
pub fn sum_slice(data: &[i64], slice: SliceRange) -> Wide {
    data[slice.as_range()].iter().fold(Wide::ZERO, |acc, &v| acc + widen(v))
}

/// A spawned worker together with the slice it owns
#[derive(Debug)]
pub struct Worker {
    slice: SliceRange,
    handle: JoinHandle<Wide>,
}

impl Worker {
    /// Slice owned by this worker
    pub const fn slice(&self) -> SliceRange {
        self.slice
    }

    /// Block until the worker finishes and return its partial sum.
    pub fn join(self) -> Result<Wide> {
        self.handle
            .join()
            .map_err(|_| SliceSumError::WorkerPanicked { index: self.slice.index })
    }
}

/// Spawn a named OS thread that sums `slice` of `data`.
pub fn spawn_worker(data: Arc<[i64]>, slice: SliceRange) -> Result<Worker> {
    let handle = thread::Builder::new()
        .name(format!("{WORKER_THREAD_PREFIX}{}", slice.index))
        .spawn(move || {
            let partial = sum_slice(&data, slice);
            tracing::debug!(
                target: LOG_TARGET,
                index = slice.index,
                start = slice.start,
                end = slice.end,
                %partial,
                "Worker finished slice"
            );
            partial
        })
        .map_err(|source| SliceSumError::Spawn { index: slice.index, source })?;

    Ok(Worker { slice, handle })
}
