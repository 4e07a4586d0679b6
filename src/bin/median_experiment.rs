//! Times the median-of-medians median on random inputs of growing size and
//! compares the measured runtimes with a linear growth curve.
//!
//! Usage: `median_experiment [seed]` (default seed 42).

use std::error::Error;
use std::time::Instant;

use momselect::{median, Median};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 15] = [
    15, 16, 17, 18, 19, 20, 50, 100, 500, 1000, 2000, 4000, 8000, 16000, 32000,
];

/// Arrays up to this length are printed in full.
const PRINT_LIMIT: usize = 20;

fn main() -> Result<(), Box<dyn Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut exp_times = Vec::with_capacity(SIZES.len());
    let mut theo_values = Vec::with_capacity(SIZES.len());

    for &n in &SIZES {
        let arr: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=10_000)).collect();
        let parity = if n % 2 == 0 { "Even" } else { "Odd" };

        println!("Input size (n): {} ({} elements)", n, parity);
        if n <= PRINT_LIMIT {
            println!("Original array:\n{:?}", arr);
        }

        let start = Instant::now();
        let result = median(&arr)?;
        let elapsed = start.elapsed();

        let mut sorted = arr.clone();
        sorted.sort_unstable();
        if n <= PRINT_LIMIT {
            println!("\nSorted array:\n{:?}", sorted);
        }

        let value = result.mean().ok_or("median is not representable as f64")?;
        match result {
            Median::Single(m) => {
                println!("Median element (index={}): {}", n / 2, m);
                if m != sorted[n / 2] {
                    return Err(format!("median mismatch for n = {}", n).into());
                }
            }
            Median::Pair(m1, m2) => {
                println!(
                    "Median elements (indices={},{}): ({}, {}), Average = {}",
                    n / 2 - 1,
                    n / 2,
                    m1,
                    m2,
                    value
                );
                if m1 != sorted[n / 2 - 1] || m2 != sorted[n / 2] {
                    return Err(format!("median mismatch for n = {}", n).into());
                }
            }
        }

        let runtime_ms = elapsed.as_secs_f64() * 1e3;
        println!("Runtime: {:.6} ms\n", runtime_ms);

        exp_times.push(runtime_ms);
        theo_values.push(n as f64);
    }

    let avg_exp = exp_times.iter().sum::<f64>() / exp_times.len() as f64;
    let avg_theo = theo_values.iter().sum::<f64>() / theo_values.len() as f64;
    let scaling_factor = avg_exp / avg_theo;

    println!("Summary of Averages and Scaling");
    println!("Average Experimental Time (ms): {:.6}", avg_exp);
    println!("Average Theoretical Value     : {:.6}", avg_theo);
    println!("Scaling Factor (avg_exp/avg_theo): {:.6}", scaling_factor);

    println!("\nDetailed Table (Time in ms)");
    println!("n\tExperimental(ms)\tTheoretical\tScaled Theoretical(ms)");
    for ((n, e), t) in SIZES.iter().zip(&exp_times).zip(&theo_values) {
        println!(
            "{}\t{:.6}\t\t{:.6}\t\t{:.6}",
            n,
            e,
            t,
            t * scaling_factor
        );
    }

    Ok(())
}
