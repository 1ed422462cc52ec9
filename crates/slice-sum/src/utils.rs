//! Small numeric helpers

use crate::Wide;
use std::time::Duration;

/// Lift an `i64` into the wide accumulator type.
///
/// Every `i64` fits in 256 bits, so the conversion cannot fail.
pub fn widen(value: i64) -> Wide {
    Wide::unchecked_from(value)
}

/// Ratio of the sequential to the parallel elapsed time.
///
/// Returns `None` when the parallel pass took no measurable time.
pub fn speedup(sequential: Duration, parallel: Duration) -> Option<f64> {
    (!parallel.is_zero()).then(|| sequential.as_secs_f64() / parallel.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_extremes() {
        assert_eq!(widen(i64::MAX).to_string(), "9223372036854775807");
        assert_eq!(widen(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(widen(0), Wide::ZERO);
    }

    #[test]
    fn test_speedup() {
        let ratio = speedup(Duration::from_millis(40), Duration::from_millis(10)).unwrap();
        assert!((ratio - 4.0).abs() < f64::EPSILON);
        assert_eq!(speedup(Duration::from_millis(40), Duration::ZERO), None);
    }
}
