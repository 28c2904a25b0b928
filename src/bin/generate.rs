use std::fs::File;
use std::io::{BufWriter, Write};

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use skyroute::problem::{CaseOptions, Problem, Waypoint};
use skyroute::search::{SearchParams, lowest_time_exhaustive};
use skyroute::types::round3;

/// Emits a random sentinel-terminated case file together with the matching
/// expected totals, computed by the exhaustive reference solver.
#[derive(Parser)]
struct Args {
    /// Number of test cases to generate
    #[arg(short, long, default_value_t = 3)]
    cases: usize,

    /// Maximum number of intermediate waypoints per case
    #[arg(short = 'w', long, default_value_t = 6)]
    max_waypoints: usize,

    /// RNG seed; equal seeds reproduce equal files
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output path for the case file
    #[arg(short, long, default_value = "sample_input_gen.txt")]
    out: String,

    /// Output path for the expected totals
    #[arg(short, long, default_value = "expected_output_gen.txt")]
    expected: String,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    assert!(
        (1..=20).contains(&args.max_waypoints),
        "--max-waypoints must be between 1 and 20 to stay enumerable"
    );

    let options = CaseOptions::default();
    let params = SearchParams::default();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);

    let mut cases = Vec::with_capacity(args.cases);
    for _ in 0..args.cases {
        let count = rng.random_range(1..=args.max_waypoints);
        let mut waypoints = Vec::with_capacity(count + 2);
        waypoints.push(Waypoint::new(options.origin.0, options.origin.1, 0.0));
        for _ in 0..count {
            waypoints.push(Waypoint::new(
                rng.random_range(0..=100) as f64,
                rng.random_range(0..=100) as f64,
                rng.random_range(0..=50) as f64,
            ));
        }
        waypoints.push(Waypoint::new(
            options.destination.0,
            options.destination.1,
            0.0,
        ));

        cases.push(Problem::from_waypoints(waypoints).expect("generated waypoints are in range"));
    }

    let mut case_writer = BufWriter::new(File::create(&args.out)?);
    Problem::write_cases(&mut case_writer, &cases)?;
    case_writer.flush()?;

    let mut expected_writer = BufWriter::new(File::create(&args.expected)?);
    for problem in &cases {
        let reference = lowest_time_exhaustive(problem, &params);
        writeln!(expected_writer, "{:.3}", round3(reference.total()))?;
    }
    expected_writer.flush()?;

    println!(
        "Wrote {} cases to {} (expected totals in {})",
        cases.len(),
        args.out,
        args.expected
    );

    Ok(())
}
