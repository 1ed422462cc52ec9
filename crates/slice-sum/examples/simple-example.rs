//! Simple example: reduce a small random dataset
//!
//! Run with:
//! ```bash
//! cargo run --example simple-example
//! ```

use slice_sum::{Dataset, parallel_sum, sequential_sum, verify_totals};

fn main() {
    let data = Dataset::random(500_000, 42);

    let reduction = match parallel_sum(data.share(), 8) {
        Ok(reduction) => reduction,
        Err(e) => {
            eprintln!("Parallel sum failed: {e}");
            return;
        }
    };

    for (slice, partial) in reduction.slices.iter().zip(&reduction.partials) {
        println!("Slice {}: [{}:{}] = {}", slice.index, slice.start, slice.end, partial);
    }
    println!("Total: {}", reduction.total);

    match verify_totals(reduction.total, sequential_sum(&data)) {
        Ok(()) => println!("Sequential check passed"),
        Err(e) => eprintln!("{e}"),
    }
}
