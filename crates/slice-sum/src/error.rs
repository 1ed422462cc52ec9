//! Error types

use crate::Wide;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SliceSumError>;

/// Errors surfaced by the reducer and its configuration
#[derive(Debug, thiserror::Error)]
pub enum SliceSumError {
    /// Parallel and sequential totals disagree. The reduction is correct by
    /// construction, so this always indicates a defect.
    #[error("sums are not equal: parallel total {parallel} != sequential total {sequential}")]
    Mismatch {
        /// Total folded from the per-slice partial sums
        parallel: Wide,
        /// Total recomputed on the calling thread
        sequential: Wide,
    },

    /// A worker thread panicked before returning its partial sum
    #[error("worker for slice {index} panicked")]
    WorkerPanicked {
        /// Index of the slice the worker owned
        index: usize,
    },

    /// The OS refused to spawn a worker thread
    #[error("failed to spawn worker for slice {index}: {source}")]
    Spawn {
        /// Index of the slice the worker would have owned
        index: usize,
        /// Underlying I/O error from the thread builder
        #[source]
        source: std::io::Error,
    },

    /// An environment override could not be parsed
    #[error("invalid value {value:?} for {key}")]
    Config {
        /// Environment variable name
        key: &'static str,
        /// Raw value as found in the environment
        value: String,
    },
}
