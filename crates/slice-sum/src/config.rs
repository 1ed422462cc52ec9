//! Configuration

use crate::{
    constants::{DEFAULT_LEN, FALLBACK_SLICES, MODULUS},
    dataset::Pattern,
    error::{Result, SliceSumError},
};
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr, thread};

/// How the binary prints its summary
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Run configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Number of elements in the dataset
    pub len: usize,
    /// Requested slice (and thread) count, never zero when loaded from the environment
    pub slices: usize,
    /// How the dataset is filled
    pub pattern: Pattern,
    /// Period of the modular pattern
    pub modulus: i64,
    /// Seed of the random pattern
    pub seed: u64,
    /// Summary format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            slices: default_slices(),
            pattern: Pattern::Modular,
            modulus: MODULUS,
            seed: 0,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            len: parse_or(&lookup, "SLICE_SUM_LEN", defaults.len)?,
            slices: parse_slices(&lookup, defaults.slices)?,
            pattern: parse_or(&lookup, "SLICE_SUM_DATASET", defaults.pattern)?,
            modulus: defaults.modulus,
            seed: parse_or(&lookup, "SLICE_SUM_SEED", defaults.seed)?,
            output: parse_or(&lookup, "SLICE_SUM_OUTPUT", defaults.output)?,
        })
    }
}

/// One slice per available hardware thread
pub fn default_slices() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(FALLBACK_SLICES)
}

fn parse_slices<F>(lookup: &F, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    const KEY: &str = "SLICE_SUM_SLICES";
    match parse_or(lookup, KEY, default)? {
        0 => Err(SliceSumError::Config { key: KEY, value: lookup(KEY).unwrap_or_default() }),
        slices => Ok(slices),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => {
            value.trim().parse().map_err(|_| SliceSumError::Config { key, value })
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.len, 2_000_000);
        assert_eq!(config.slices, default_slices());
        assert!(config.slices >= 1);
        assert_eq!(config.pattern, Pattern::Modular);
        assert_eq!(config.modulus, 1000);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLICE_SUM_LEN", "500000"),
            ("SLICE_SUM_SLICES", " 8 "),
            ("SLICE_SUM_DATASET", "random"),
            ("SLICE_SUM_SEED", "17"),
            ("SLICE_SUM_OUTPUT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.len, 500_000);
        assert_eq!(config.slices, 8);
        assert_eq!(config.pattern, Pattern::Random);
        assert_eq!(config.seed, 17);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_zero_slices_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SLICE_SUM_SLICES", "0")])).unwrap_err();
        match err {
            SliceSumError::Config { key, value } => {
                assert_eq!(key, "SLICE_SUM_SLICES");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_value() {
        let err = Config::from_lookup(lookup_from(&[("SLICE_SUM_LEN", "lots")])).unwrap_err();
        match err {
            SliceSumError::Config { key, value } => {
                assert_eq!(key, "SLICE_SUM_LEN");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_pattern() {
        let err =
            Config::from_lookup(lookup_from(&[("SLICE_SUM_DATASET", "primes")])).unwrap_err();
        assert!(matches!(err, SliceSumError::Config { key: "SLICE_SUM_DATASET", .. }));
    }
}
