/// Travel-model parameters shared by both solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    /// Cruise speed in distance units per time unit.
    pub speed: f64,
    /// Fixed time charged for every visited stop, destination included.
    pub dwell_time: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            speed: 2.0,
            dwell_time: 10.0,
        }
    }
}
