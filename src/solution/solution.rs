use crate::problem::Problem;
use crate::search::SearchParams;
use crate::types::{Cost, WaypointId, round3};

/// A committed routing decision: the visiting order plus the cost breakdown
/// it implies. Every waypoint off the path contributed its penalty exactly
/// once; every waypoint on it contributed travel plus dwell.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Visited waypoints in order: origin first, destination last, indices
    /// strictly increasing.
    pub path: Vec<WaypointId>,
    pub travel_time: Cost,
    pub dwell_time: Cost,
    pub penalty: Cost,
}

impl Solution {
    /// Recomputes the full cost breakdown for a visiting order. Dwell is
    /// charged once per arrival, so the origin is free and the destination
    /// is not.
    pub fn evaluate(problem: &Problem, params: &SearchParams, path: Vec<WaypointId>) -> Self {
        debug_assert!(path.len() >= 2);
        debug_assert!(path.windows(2).all(|leg| leg[0] < leg[1]));

        let travel_time: Cost = path
            .windows(2)
            .map(|leg| problem.distance(leg[0], leg[1]) / params.speed)
            .sum();
        let dwell_time = params.dwell_time * (path.len() - 1) as Cost;
        let visited_penalty: Cost = path
            .iter()
            .map(|&id| problem.waypoint(id).penalty)
            .sum();
        let penalty = problem.total_penalty() - visited_penalty;

        Solution {
            path,
            travel_time,
            dwell_time,
            penalty,
        }
    }

    /// The scalar result: travel plus dwell plus skipped penalties.
    #[inline(always)]
    pub fn total(&self) -> Cost {
        self.travel_time + self.dwell_time + self.penalty
    }

    /// The total at expected-output precision.
    pub fn rounded_total(&self) -> Cost {
        round3(self.total())
    }

    /// The waypoints the route never visits.
    pub fn skipped(&self, n_waypoints: usize) -> Vec<WaypointId> {
        let mut skipped = Vec::with_capacity(n_waypoints - self.path.len());
        let mut on_path = self.path.iter().peekable();
        for id in 0..n_waypoints as WaypointId {
            match on_path.peek() {
                Some(&&next) if next == id => {
                    on_path.next();
                }
                _ => skipped.push(id),
            }
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{CaseOptions, Problem};

    fn scenario() -> Problem {
        let input = "3\n25 25 5\n50 50 10\n75 75 7\n0\n";
        Problem::read_cases(input.as_bytes(), &CaseOptions::default())
            .unwrap()
            .remove(0)
    }

    #[test]
    fn evaluate_splits_travel_dwell_and_penalty() {
        let problem = scenario();
        let params = SearchParams::default();

        let solution = Solution::evaluate(&problem, &params, vec![0, 2, 4]);
        let leg = 5000f64.sqrt() / 2.0;

        assert!((solution.travel_time - 2.0 * leg).abs() < 1e-9);
        assert_eq!(solution.dwell_time, 20.0);
        assert_eq!(solution.penalty, 12.0);
        assert!((solution.total() - (2.0 * leg + 32.0)).abs() < 1e-9);
    }

    #[test]
    fn visited_and_skipped_partition_the_waypoints() {
        let problem = scenario();
        let params = SearchParams::default();

        let solution = Solution::evaluate(&problem, &params, vec![0, 2, 4]);
        let skipped = solution.skipped(problem.n_waypoints());

        assert_eq!(skipped, vec![1, 3]);
        assert_eq!(skipped.len() + solution.path.len(), problem.n_waypoints());
    }

    #[test]
    fn rounded_total_matches_fixture_precision() {
        let problem = scenario();
        let params = SearchParams::default();

        let direct = Solution::evaluate(&problem, &params, vec![0, 4]);
        assert_eq!(direct.rounded_total(), 102.711);
    }
}
