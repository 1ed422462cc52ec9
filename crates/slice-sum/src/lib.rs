//! Thread-per-slice parallel summation
//!
//! Splits an `i64` dataset into near-equal contiguous slices, sums each slice
//! on its own OS thread, folds the partial sums into a total and checks it
//! against a sequential recomputation.
//!
//! Sums are accumulated in [`Wide`] (`I256`). An `i64` dataset addressable by
//! `usize` cannot reach 2^127 in magnitude, so the accumulator never overflows.
//!
//! ```no_run
//! use slice_sum::{Dataset, parallel_sum, sequential_sum, verify_totals};
//!
//! let data = Dataset::modular(2_000_000, 1000);
//! let reduction = parallel_sum(data.share(), 8)?;
//! verify_totals(reduction.total, sequential_sum(&data))?;
//! # Ok::<(), slice_sum::SliceSumError>(())
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod planner;
pub mod reducer;
pub mod summary;
pub mod utils;
pub mod verify;
pub mod worker;

/// Accumulator for partial and total sums
pub type Wide = alloy_primitives::I256;

pub use config::{Config, OutputFormat};
pub use dataset::{Dataset, Pattern};
pub use error::{Result, SliceSumError};
pub use planner::{SliceRange, effective_slice_count, plan_slices};
pub use reducer::{Reduction, fold_partials, parallel_sum};
pub use summary::{Report, Summary, run, summarize};
pub use verify::{sequential_sum, verify_totals};
pub use worker::{Worker, spawn_worker, sum_slice};
