use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use skyroute::metrics::{self, SolveRecord};
use skyroute::problem::{CaseOptions, Problem};
use skyroute::search::{SearchParams, SearchStats, lowest_time};
use skyroute::types::{round3, within_tolerance};
use skyroute::utils::{Args, Parser, enumerate_input_files, read_expected_totals};

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let input_files = enumerate_input_files(&args)?;

    let params = SearchParams {
        speed: args.speed,
        dwell_time: args.dwell,
    };
    let options = CaseOptions {
        origin: (0.0, 0.0),
        destination: (args.dest_x, args.dest_y),
    };

    let expected = match &args.expected {
        Some(path) => Some(read_expected_totals(BufReader::new(File::open(path)?))?),
        None => None,
    };

    let mut records = Vec::new();
    let mut case_index = 0usize;
    let mut mismatches = 0usize;

    for path in input_files {
        let instance_path = match path.to_str() {
            Some(p) => p,
            None => {
                eprintln!("Invalid input path: {:?}", path);
                continue;
            }
        };

        let cases = match Problem::load(instance_path, &options) {
            Ok(cases) => cases,
            Err(e) => {
                eprintln!("Failed to load cases from '{}': {:?}", instance_path, e);
                continue;
            }
        };

        println!("------");
        println!("Instance: {:?} ({} cases)", instance_path, cases.len());

        for problem in &cases {
            let mut stats = SearchStats::default();

            let start_time = Instant::now();
            let solution = match lowest_time(problem, &params, Some(&mut stats)) {
                Ok(solution) => solution,
                Err(e) => {
                    // A failed case never aborts the batch.
                    eprintln!("Case {} failed: {:?}", case_index, e);
                    case_index += 1;
                    continue;
                }
            };
            let elapsed = start_time.elapsed().as_secs_f64();

            let total = solution.total();
            match expected.as_ref().and_then(|totals| totals.get(case_index)) {
                Some(&want) if within_tolerance(total, want) => {
                    println!(
                        "Case {}: {:.3} (expected {:.3}, ok)",
                        case_index,
                        round3(total),
                        want
                    );
                }
                Some(&want) => {
                    mismatches += 1;
                    println!(
                        "Case {}: {:.3} (expected {:.3}, MISMATCH)",
                        case_index,
                        round3(total),
                        want
                    );
                }
                None => {
                    println!(
                        "Case {}: {:.3} via {:?}",
                        case_index,
                        round3(total),
                        solution.path
                    );
                }
            }

            records.push(SolveRecord {
                case_index,
                n_waypoints: problem.n_waypoints(),
                visited: solution.path.len(),
                skipped: problem.n_waypoints() - solution.path.len(),
                frontier_pops: stats.pops,
                stale_pops: stats.stale_pops,
                relaxations: stats.relaxations,
                frontier_peak: stats.frontier_peak,
                travel_time: solution.travel_time,
                dwell_time: solution.dwell_time,
                penalty: solution.penalty,
                total_time: total,
                elapsed,
            });

            case_index += 1;
        }
    }

    if expected.is_some() {
        println!("------");
        println!(
            "Matched {}/{} cases within 0.001",
            case_index - mismatches,
            case_index
        );
    }

    if let Some(metrics_path) = &args.metrics {
        metrics::serialize_to_parquet(&records, metrics_path)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        println!("Wrote {} solve records to {}", records.len(), metrics_path);
    }

    Ok(())
}
