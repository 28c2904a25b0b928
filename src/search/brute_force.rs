use crate::problem::Problem;
use crate::search::params::SearchParams;
use crate::solution::Solution;
use crate::types::WaypointId;

/// Upper bound on intermediate waypoints the exhaustive reference will
/// enumerate; beyond this the subset count is no longer practical.
const MAX_INTERMEDIATES: usize = 25;

/// Exact reference solver: enumerates every subset of intermediate
/// waypoints, visits each chosen subset in index order, and keeps the
/// cheapest result. The first subset reaching the minimum wins, so the
/// outcome is deterministic.
///
/// Intended for fixture regeneration and for validating [`lowest_time`]
/// on small cases; panics when the case is too large to enumerate.
///
/// [`lowest_time`]: crate::search::lowest_time
pub fn lowest_time_exhaustive(problem: &Problem, params: &SearchParams) -> Solution {
    let n = problem.n_waypoints();
    let goal = (n - 1) as WaypointId;
    let intermediates = n - 2;
    assert!(
        intermediates <= MAX_INTERMEDIATES,
        "exhaustive reference is limited to {} intermediate waypoints, got {}",
        MAX_INTERMEDIATES,
        intermediates
    );

    let mut best: Option<Solution> = None;
    for mask in 0u32..(1u32 << intermediates) {
        let mut path = Vec::with_capacity(intermediates + 2);
        path.push(0);
        for bit in 0..intermediates {
            if mask & (1 << bit) != 0 {
                path.push((bit + 1) as WaypointId);
            }
        }
        path.push(goal);

        let candidate = Solution::evaluate(problem, params, path);
        let improves = match &best {
            Some(current) => candidate.total() < current.total(),
            None => true,
        };
        if improves {
            best = Some(candidate);
        }
    }

    best.expect("at least the direct origin-to-destination route is enumerated")
}
