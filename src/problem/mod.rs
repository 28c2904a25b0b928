mod index;
mod problem;

pub use problem::{CaseOptions, Problem, ProblemError, Waypoint};
