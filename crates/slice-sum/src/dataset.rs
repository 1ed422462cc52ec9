//! Input datasets
//!
//! A [`Dataset`] is generated once and never mutated. Workers share it through
//! an `Arc<[i64]>` handle.

use crate::{
    Wide,
    constants::{RANDOM_MAX, RANDOM_MIN},
    utils::widen,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::{ops::Deref, str::FromStr, sync::Arc};

/// How a dataset is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// `i % modulus` for index `i`
    #[default]
    Modular,
    /// Uniform values in `RANDOM_MIN..=RANDOM_MAX` from a seeded generator
    Random,
}

impl Pattern {
    /// Returns the string representation of the pattern
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modular => "modular",
            Self::Random => "random",
        }
    }
}

impl FromStr for Pattern {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modular" => Ok(Self::Modular),
            "random" => Ok(Self::Random),
            _ => Err(()),
        }
    }
}

/// Immutable sequence of `i64` values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Arc<[i64]>,
}

impl Dataset {
    /// Wrap existing values
    pub fn new(values: Vec<i64>) -> Self {
        Self { values: values.into() }
    }

    /// `len` values following `i % modulus`
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero and `len` is not.
    pub fn modular(len: usize, modulus: i64) -> Self {
        (0..len as i64).map(|i| i % modulus).collect::<Vec<_>>().into()
    }

    /// `len` uniform values in `RANDOM_MIN..=RANDOM_MAX`, reproducible for a given seed
    pub fn random(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(RANDOM_MIN..=RANDOM_MAX)).collect::<Vec<_>>().into()
    }

    /// Generate a dataset of `len` values following `pattern`
    ///
    /// # Panics
    ///
    /// See [`Dataset::modular`].
    pub fn generate(pattern: Pattern, len: usize, modulus: i64, seed: u64) -> Self {
        match pattern {
            Pattern::Modular => Self::modular(len, modulus),
            Pattern::Random => Self::random(len, seed),
        }
    }

    /// Closed-form sum of [`Dataset::modular`] for the same `len` and `modulus`
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn expected_modular_sum(len: usize, modulus: i64) -> Wide {
        let len = widen(len as i64);
        let modulus = widen(modulus);
        let full_periods = len / modulus;
        let tail = len % modulus;
        let two = widen(2);
        let period_sum = modulus * (modulus - widen(1)) / two;
        let tail_sum = tail * (tail - widen(1)) / two;
        full_periods * period_sum + tail_sum
    }

    /// Shared handle to the values, cheap to clone into worker threads
    pub fn share(&self) -> Arc<[i64]> {
        Arc::clone(&self.values)
    }
}

impl Deref for Dataset {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}
