//! Partition and equivalence properties of the parallel reducer

use proptest::prelude::*;
use slice_sum::{
    Dataset, SliceRange, Wide, effective_slice_count, parallel_sum, plan_slices, sequential_sum,
    utils::widen,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn slices_partition_the_range(len in 0usize..5_000, n in 0usize..64) {
        let slices = plan_slices(len, n);

        prop_assert_eq!(slices.len(), effective_slice_count(len, n));
        let covered: usize = slices.iter().map(SliceRange::len).sum();
        let expected = if len == 0 || n == 0 { 0 } else { len };
        prop_assert_eq!(covered, expected);

        let mut expected_start = 0;
        for (i, slice) in slices.iter().enumerate() {
            prop_assert_eq!(slice.index, i);
            prop_assert_eq!(slice.start, expected_start);
            prop_assert!(!slice.is_empty());
            expected_start = slice.end;
        }
        if !slices.is_empty() {
            prop_assert_eq!(expected_start, len);
        }
    }

    #[test]
    fn slice_sizes_differ_by_at_most_one(len in 1usize..5_000, n in 1usize..64) {
        let slices = plan_slices(len, n);
        let min = slices.iter().map(SliceRange::len).min().unwrap();
        let max = slices.iter().map(SliceRange::len).max().unwrap();
        prop_assert!(max - min <= 1);

        // Longer slices come first.
        let lens: Vec<usize> = slices.iter().map(SliceRange::len).collect();
        prop_assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn clamps_to_element_count(len in 0usize..100, extra in 1usize..100) {
        prop_assert_eq!(effective_slice_count(len, len + extra), len);
        prop_assert_eq!(plan_slices(len, len + extra).len(), len);
    }

    #[test]
    fn modular_total_matches_closed_form(
        len in 0usize..20_000,
        modulus in 1i64..2_000,
        n in 1usize..9,
    ) {
        let data = Dataset::modular(len, modulus);
        let reduction = parallel_sum(data.share(), n).unwrap();
        prop_assert_eq!(reduction.total, Dataset::expected_modular_sum(len, modulus));
    }

    #[test]
    fn parallel_matches_sequential(
        values in prop::collection::vec(any::<i64>(), 0..2_000),
        n in 0usize..12,
    ) {
        let data = Dataset::new(values);
        let reduction = parallel_sum(data.share(), n).unwrap();

        if data.is_empty() || n == 0 {
            prop_assert_eq!(reduction.total, Wide::ZERO);
            prop_assert_eq!(reduction.workers(), 0);
        } else {
            prop_assert_eq!(reduction.total, sequential_sum(&data));
        }
    }
}

#[test]
fn test_modular_two_million_eight_slices() {
    let data = Dataset::modular(2_000_000, 1000);
    let reduction = parallel_sum(data.share(), 8).unwrap();
    assert_eq!(reduction.total, widen(999_000_000));
    assert_eq!(reduction.total, Dataset::expected_modular_sum(2_000_000, 1000));
    assert_eq!(reduction.total, sequential_sum(&data));
}

#[test]
fn test_seven_elements_three_slices() {
    let lens: Vec<usize> = plan_slices(7, 3).iter().map(SliceRange::len).collect();
    assert_eq!(lens, vec![3, 2, 2]);
}

#[test]
fn test_three_elements_ten_slices() {
    let slices = plan_slices(3, 10);
    assert_eq!(slices.len(), 3);
    assert!(slices.iter().all(|s| s.len() == 1));
}

#[test]
fn test_extreme_values_do_not_overflow() {
    let data = Dataset::new(vec![i64::MAX; 1_024]);
    let reduction = parallel_sum(data.share(), 7).unwrap();
    assert_eq!(reduction.total, widen(i64::MAX) * widen(1_024));
    assert_eq!(reduction.total, sequential_sum(&data));
}
