//! Defaults and fixed names

/// Log target for every event emitted by this crate
pub(crate) const LOG_TARGET: &str = "slice_sum";

/// Dataset length used when `SLICE_SUM_LEN` is not set
pub const DEFAULT_LEN: usize = 2_000_000;

/// Slice count used when the available parallelism cannot be queried
pub const FALLBACK_SLICES: usize = 4;

/// Period of the modular dataset pattern (`i % MODULUS`)
pub const MODULUS: i64 = 1000;

/// Inclusive bounds of values drawn by the random dataset pattern
pub const RANDOM_MIN: i64 = 1;

/// Upper inclusive bound, see [`RANDOM_MIN`]
pub const RANDOM_MAX: i64 = 100;

/// Prefix of worker thread names, suffixed with the slice index
pub(crate) const WORKER_THREAD_PREFIX: &str = "slice-sum-";
