use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::problem::Problem;
use crate::search::params::SearchParams;
use crate::search::stats::SearchStats;
use crate::solution::Solution;
use crate::types::{Cost, WaypointId};

#[derive(Debug)]
pub enum SearchError {
    /// The frontier emptied before the destination was finalized.
    NoRouteFound(String),
}

/// One frontier entry: the cheapest known way to stand at `waypoint` having
/// committed `path`. `seq` breaks cost ties by insertion order.
#[derive(Debug, Clone)]
struct Frontier {
    waypoint: WaypointId,
    cost: Cost,
    seq: u64,
    path: Vec<WaypointId>,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse so the cheapest state pops
        // first, the earlier insertion winning ties.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Computes the minimum-total-time traversal from the origin to the
/// destination.
///
/// Dijkstra-style relaxation over waypoint indices with skip penalties
/// folded into the edge weights: moving from `i` to `j > i` pays
/// `distance(i, j) / speed + dwell_time` plus the penalties of every
/// waypoint strictly between `i` and `j`, which that move finalizes as
/// skipped. Forward-only expansion keeps the skip charge path-independent,
/// so a dense best-cost table per target index is a sound memoization and
/// every waypoint is charged exactly once. Stale frontier entries are
/// discarded lazily on pop.
///
/// Deterministic for identical input: cost ties pop in insertion order and
/// relaxation requires strict improvement.
pub fn lowest_time(
    problem: &Problem,
    params: &SearchParams,
    mut stats: Option<&mut SearchStats>,
) -> Result<Solution, SearchError> {
    debug_assert!(params.speed > 0.0);

    let n = problem.n_waypoints();
    let goal = (n - 1) as WaypointId;

    let mut finalized = vec![false; n];
    let mut best = vec![Cost::INFINITY; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    best[0] = 0.0;
    heap.push(Frontier {
        waypoint: 0,
        cost: 0.0,
        seq,
        path: vec![0],
    });

    while let Some(state) = heap.pop() {
        let here = state.waypoint as usize;

        if let Some(stats) = stats.as_deref_mut() {
            stats.pops += 1;
            if finalized[here] {
                stats.stale_pops += 1;
            }
        }
        if finalized[here] {
            continue;
        }
        finalized[here] = true;

        if state.waypoint == goal {
            let solution = Solution::evaluate(problem, params, state.path);
            debug_assert!((solution.total() - state.cost).abs() < 1e-9);
            return Ok(solution);
        }

        for next in (state.waypoint + 1)..=goal {
            let target = next as usize;
            if finalized[target] {
                continue;
            }

            let travel = problem.distance(state.waypoint, next) / params.speed;
            let skipped = problem.penalty_between(state.waypoint, next);
            let candidate = state.cost + travel + params.dwell_time + skipped;

            if candidate < best[target] {
                best[target] = candidate;
                seq += 1;
                let mut path = state.path.clone();
                path.push(next);
                heap.push(Frontier {
                    waypoint: next,
                    cost: candidate,
                    seq,
                    path,
                });
                if let Some(stats) = stats.as_deref_mut() {
                    stats.relaxations += 1;
                    stats.frontier_peak = stats.frontier_peak.max(heap.len());
                }
            }
        }
    }

    Err(SearchError::NoRouteFound(format!(
        "frontier exhausted before reaching waypoint {}",
        goal
    )))
}
