//! Walks a vector of random complex numbers through shuffle, find, insert, remove,
//! uniquify and every sorting algorithm, timing each sort on sorted, shuffled and
//! reversed input.

use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ranked_vec::{Complex, RankVec, SortAlgorithm};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of random complex numbers to generate.
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Seed for the random generator; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Lower bound of both parts of the generated numbers.
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    min: f64,

    /// Upper bound (exclusive) of both parts of the generated numbers.
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max: f64,

    /// Rank at which `(5.5 - 3.3i)` is inserted.
    #[arg(long, default_value_t = 10)]
    insert_at: usize,

    /// Rank of the element that is removed.
    #[arg(long, default_value_t = 2)]
    remove_at: usize,

    /// Lower bound (inclusive) of the magnitude band to report.
    #[arg(long, default_value_t = 5.0)]
    band_lo: f64,

    /// Upper bound (exclusive) of the magnitude band to report.
    #[arg(long, default_value_t = 10.0)]
    band_hi: f64,
}

fn render(v: &[Complex]) -> String {
    v.iter()
        .map(|c| format!("{c:.3}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorts a copy of `input` and returns the elapsed wall time in milliseconds.
fn time_sort(input: &RankVec<Complex>, algorithm: SortAlgorithm, rng: &mut StdRng) -> f64 {
    let mut v = input.clone();
    let start = Instant::now();
    v.sort_by_algorithm_with(algorithm, 0, v.len(), rng);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    if algorithm != SortAlgorithm::Selection && v.disordered() != 0 {
        warn!(%algorithm, "result is not sorted");
    }
    elapsed
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.min < cli.max, "--min must be below --max");
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut v: RankVec<Complex> = (0..cli.size)
        .map(|_| Complex::random(&mut rng, cli.min, cli.max))
        .collect();
    println!("initial:\n{}", render(&v));

    v.shuffle_range_with(0, v.len(), &mut rng);
    println!("shuffled:\n{}", render(&v));

    if let Some(target) = v.get(5usize.min(v.len().saturating_sub(1))).copied() {
        match v.find(&target) {
            Some(rank) => println!("found {target:.3} at rank {rank}"),
            None => println!("{target:.3} not found"),
        }
    }

    match v.insert(cli.insert_at, Complex::new(5.5, -3.3)) {
        Ok(rank) => println!("inserted at rank {rank}:\n{}", render(&v)),
        Err(err) => warn!(%err, "insert skipped"),
    }

    match v.remove(cli.remove_at) {
        Ok(removed) => println!("removed {removed:.3}:\n{}", render(&v)),
        Err(err) => warn!(%err, "remove skipped"),
    }

    v.merge_sort(0, v.len());
    let removed = v.uniquify();
    println!("uniquified ({removed} removed):\n{}", render(&v));

    let sorted = v.clone();
    let mut shuffled = v.clone();
    shuffled.shuffle_range_with(0, shuffled.len(), &mut rng);
    let reversed: RankVec<Complex> = sorted.iter().rev().copied().collect();

    for (label, input) in [
        ("sorted", &sorted),
        ("shuffled", &shuffled),
        ("reversed", &reversed),
    ] {
        println!("{label} input:");
        for algorithm in SortAlgorithm::ALL {
            let ms = time_sort(input, algorithm, &mut rng);
            println!("  {:<9} {ms:.4} ms", algorithm.name());
        }
    }

    println!("sorted by magnitude:\n{}", render(&sorted));

    let band: Vec<Complex> = sorted
        .iter()
        .filter(|c| (cli.band_lo..cli.band_hi).contains(&c.magnitude()))
        .copied()
        .collect();
    println!(
        "magnitude in [{}, {}):\n{}",
        cli.band_lo,
        cli.band_hi,
        render(&band)
    );

    info!(len = v.len(), "done");
    Ok(())
}
