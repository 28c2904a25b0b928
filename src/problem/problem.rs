use crate::problem::index::ProblemIndex;
use crate::types::{Cost, WaypointId};
use crate::utils::Matrix;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// A point the route may visit, or skip for `penalty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Cost charged exactly once if this waypoint is never visited.
    pub penalty: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, penalty: f64) -> Self {
        Waypoint { x, y, penalty }
    }

    #[inline(always)]
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

#[derive(Debug)]
pub enum ProblemError {
    /// The case stream was malformed or could not be read.
    Parse(String),
    /// A waypoint carried a negative or non-finite component, or the case
    /// had fewer than two waypoints after endpoint wrapping.
    InvalidWaypoint(String),
}

/// Endpoints the loader wraps around every case. The `(0,0)` origin and
/// `(100,100)` destination are the dataset convention, not a requirement.
#[derive(Debug, Clone, Copy)]
pub struct CaseOptions {
    pub origin: (f64, f64),
    pub destination: (f64, f64),
}

impl Default for CaseOptions {
    fn default() -> Self {
        CaseOptions {
            origin: (0.0, 0.0),
            destination: (100.0, 100.0),
        }
    }
}

/// One validated route-optimization case: waypoint 0 is the origin, the
/// last waypoint is the destination, both with zero penalty.
pub struct Problem {
    waypoints: Vec<Waypoint>,
    index: ProblemIndex,
}

impl Problem {
    /// Validates a full waypoint list (endpoints included) and precomputes
    /// the distance/penalty index.
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Result<Self, ProblemError> {
        if waypoints.len() < 2 {
            return Err(ProblemError::InvalidWaypoint(format!(
                "expected at least an origin and a destination, got {} waypoints",
                waypoints.len()
            )));
        }
        if waypoints.len() > WaypointId::MAX as usize + 1 {
            return Err(ProblemError::InvalidWaypoint(format!(
                "too many waypoints: {}",
                waypoints.len()
            )));
        }
        for (i, waypoint) in waypoints.iter().enumerate() {
            let components = [waypoint.x, waypoint.y, waypoint.penalty];
            if components.iter().any(|c| !c.is_finite() || *c < 0.0) {
                return Err(ProblemError::InvalidWaypoint(format!(
                    "waypoint {} has a negative or non-finite component: ({}, {}, penalty {})",
                    i, waypoint.x, waypoint.y, waypoint.penalty
                )));
            }
        }

        let index = ProblemIndex::new(&waypoints);
        Ok(Problem { waypoints, index })
    }

    /// Loads all cases from a sentinel-terminated case file.
    pub fn load(filename: &str, options: &CaseOptions) -> Result<Vec<Problem>, ProblemError> {
        let file = File::open(filename)
            .map_err(|e| ProblemError::Parse(format!("{}: {}", filename, e)))?;
        Self::read_cases(BufReader::new(file), options)
    }

    /// Reads a stream of cases: each starts with a waypoint count followed
    /// by that many `x y penalty` triples; a count of 0, or end of input,
    /// terminates the stream. Every case gets `options.origin` prepended and
    /// `options.destination` appended, both with zero penalty.
    pub fn read_cases<R: BufRead>(
        reader: R,
        options: &CaseOptions,
    ) -> Result<Vec<Problem>, ProblemError> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| ProblemError::Parse(e.to_string()))?;
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }

        let mut cases = Vec::new();
        let mut pos = 0;
        while let Some(count_token) = tokens.get(pos) {
            pos += 1;
            let count: usize = count_token.parse().map_err(|e| {
                ProblemError::Parse(format!("bad waypoint count {:?}: {}", count_token, e))
            })?;
            if count == 0 {
                break;
            }
            if count > WaypointId::MAX as usize {
                return Err(ProblemError::Parse(format!(
                    "case {} declares an absurd waypoint count: {}",
                    cases.len(),
                    count
                )));
            }

            if pos + 3 * count > tokens.len() {
                return Err(ProblemError::Parse(format!(
                    "case {} truncated: expected {} values, found {}",
                    cases.len(),
                    3 * count,
                    tokens.len() - pos
                )));
            }

            let mut waypoints = Vec::with_capacity(count + 2);
            waypoints.push(Waypoint::new(options.origin.0, options.origin.1, 0.0));
            for _ in 0..count {
                let x = parse_value(&tokens[pos])?;
                let y = parse_value(&tokens[pos + 1])?;
                let penalty = parse_value(&tokens[pos + 2])?;
                pos += 3;
                waypoints.push(Waypoint::new(x, y, penalty));
            }
            waypoints.push(Waypoint::new(
                options.destination.0,
                options.destination.1,
                0.0,
            ));

            cases.push(Problem::from_waypoints(waypoints)?);
        }

        Ok(cases)
    }

    /// Re-emits cases in the documented text format (intermediate triples
    /// only, endpoints stripped), ending with the 0 sentinel. Reading the
    /// output back reproduces the same numeric triples.
    pub fn write_cases<W: Write>(mut writer: W, cases: &[Problem]) -> std::io::Result<()> {
        for case in cases {
            let intermediates = case.intermediates();
            writeln!(writer, "{}", intermediates.len())?;
            for waypoint in intermediates {
                writeln!(writer, "{} {} {}", waypoint.x, waypoint.y, waypoint.penalty)?;
            }
        }
        writeln!(writer, "0")
    }

    #[inline(always)]
    pub fn n_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    #[inline(always)]
    pub fn waypoint(&self, id: WaypointId) -> &Waypoint {
        &self.waypoints[id as usize]
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The waypoints between origin and destination, in input order.
    pub fn intermediates(&self) -> &[Waypoint] {
        &self.waypoints[1..self.waypoints.len() - 1]
    }

    pub fn origin(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    pub fn destination(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    /// Euclidean distance between two waypoints.
    #[inline(always)]
    pub fn distance(&self, a: WaypointId, b: WaypointId) -> f64 {
        self.index.distance(a as usize, b as usize)
    }

    /// Summed penalty of the waypoints strictly between `a` and `b`.
    #[inline(always)]
    pub fn penalty_between(&self, a: WaypointId, b: WaypointId) -> Cost {
        self.index.penalty_between(a as usize, b as usize)
    }

    /// Summed penalty of every waypoint in the case.
    #[inline(always)]
    pub fn total_penalty(&self) -> Cost {
        self.index.total_penalty()
    }

    pub fn distance_matrix(&self) -> &Matrix<f64> {
        self.index.distance_matrix()
    }
}

fn parse_value(token: &str) -> Result<f64, ProblemError> {
    token
        .parse()
        .map_err(|e| ProblemError::Parse(format!("bad waypoint value {:?}: {}", token, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_cases(input: &str) -> Vec<Problem> {
        Problem::read_cases(input.as_bytes(), &CaseOptions::default()).unwrap()
    }

    #[test]
    fn loader_wraps_origin_and_destination() {
        let cases = default_cases("1\n50 50 20\n0\n");
        assert_eq!(cases.len(), 1);

        let problem = &cases[0];
        assert_eq!(problem.n_waypoints(), 3);
        assert_eq!(*problem.origin(), Waypoint::new(0.0, 0.0, 0.0));
        assert_eq!(problem.waypoint(1), &Waypoint::new(50.0, 50.0, 20.0));
        assert_eq!(*problem.destination(), Waypoint::new(100.0, 100.0, 0.0));
        assert_eq!(problem.total_penalty(), 20.0);
    }

    #[test]
    fn sentinel_terminates_the_stream() {
        let cases = default_cases("1\n10 10 1\n0\n1\n99 99 99\n");
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn end_of_input_terminates_without_sentinel() {
        let cases = default_cases("2\n10 10 1\n20 20 2");
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].intermediates().len(), 2);
    }

    #[test]
    fn truncated_case_is_a_parse_error() {
        let result = Problem::read_cases("2\n10 10 1\n".as_bytes(), &CaseOptions::default());
        assert!(matches!(result, Err(ProblemError::Parse(_))));
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let result = Problem::read_cases("1\n50 50 -3\n0\n".as_bytes(), &CaseOptions::default());
        assert!(matches!(result, Err(ProblemError::InvalidWaypoint(_))));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let result = Problem::from_waypoints(vec![
            Waypoint::new(0.0, 0.0, 0.0),
            Waypoint::new(f64::NAN, 10.0, 0.0),
            Waypoint::new(100.0, 100.0, 0.0),
        ]);
        assert!(matches!(result, Err(ProblemError::InvalidWaypoint(_))));
    }

    #[test]
    fn fewer_than_two_waypoints_is_rejected() {
        let result = Problem::from_waypoints(vec![Waypoint::new(0.0, 0.0, 0.0)]);
        assert!(matches!(result, Err(ProblemError::InvalidWaypoint(_))));
    }

    #[test]
    fn destination_is_configurable() {
        let options = CaseOptions {
            origin: (5.0, 5.0),
            destination: (200.0, 50.0),
        };
        let cases = Problem::read_cases("1\n50 50 20\n0\n".as_bytes(), &options).unwrap();
        assert_eq!(*cases[0].origin(), Waypoint::new(5.0, 5.0, 0.0));
        assert_eq!(*cases[0].destination(), Waypoint::new(200.0, 50.0, 0.0));
    }

    #[test]
    fn write_then_read_reproduces_the_same_triples() {
        let original = default_cases("2\n10.5 90 1\n90 10 2.25\n1\n50 50 20\n0\n");

        let mut serialized = Vec::new();
        Problem::write_cases(&mut serialized, &original).unwrap();
        let reloaded =
            Problem::read_cases(serialized.as_slice(), &CaseOptions::default()).unwrap();

        assert_eq!(original.len(), reloaded.len());
        for (a, b) in original.iter().zip(&reloaded) {
            assert_eq!(a.waypoints(), b.waypoints());
            assert_eq!(a.distance_matrix(), b.distance_matrix());
        }
    }

    #[test]
    fn penalty_prefix_ranges() {
        let cases = default_cases("3\n25 25 5\n50 50 10\n75 75 7\n0\n");
        let problem = &cases[0];
        assert_eq!(problem.penalty_between(0, 4), 22.0);
        assert_eq!(problem.penalty_between(0, 2), 5.0);
        assert_eq!(problem.penalty_between(1, 3), 10.0);
        assert_eq!(problem.penalty_between(3, 4), 0.0);
        assert_eq!(problem.total_penalty(), 22.0);
    }
}
