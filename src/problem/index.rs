use crate::problem::Waypoint;
use crate::types::Cost;
use crate::utils::Matrix;

/// Precomputed lookups for one waypoint set: pairwise Euclidean distances
/// and penalty prefix sums, so edge relaxation pays O(1) for both the travel
/// leg and the skipped-range penalty.
pub(crate) struct ProblemIndex {
    distance: Matrix<f64>,
    /// `penalty_prefix[i]` is the summed penalty of all waypoints with index < i.
    penalty_prefix: Vec<Cost>,
}

impl ProblemIndex {
    pub(crate) fn new(waypoints: &[Waypoint]) -> Self {
        let n = waypoints.len();
        let distance = Matrix::from_fn(n, n, |a, b| waypoints[a].distance_to(&waypoints[b]));

        let mut penalty_prefix = Vec::with_capacity(n + 1);
        let mut acc = 0.0;
        penalty_prefix.push(acc);
        for waypoint in waypoints {
            acc += waypoint.penalty;
            penalty_prefix.push(acc);
        }

        ProblemIndex {
            distance,
            penalty_prefix,
        }
    }

    #[inline(always)]
    pub(crate) fn distance(&self, a: usize, b: usize) -> f64 {
        self.distance[(a, b)]
    }

    /// Summed penalty of the waypoints strictly between `a` and `b`.
    #[inline(always)]
    pub(crate) fn penalty_between(&self, a: usize, b: usize) -> Cost {
        debug_assert!(a < b);
        self.penalty_prefix[b] - self.penalty_prefix[a + 1]
    }

    #[inline(always)]
    pub(crate) fn total_penalty(&self) -> Cost {
        *self.penalty_prefix.last().unwrap()
    }

    pub(crate) fn distance_matrix(&self) -> &Matrix<f64> {
        &self.distance
    }
}
