pub type WaypointId = u16;
pub type Cost = f64;

/// Absolute tolerance used when comparing a computed total against an
/// expected-output fixture value.
pub const COST_TOLERANCE: Cost = 1e-3;

/// Rounds a cost to 3 decimal places, the precision expected-output files
/// are written with.
#[inline(always)]
pub fn round3(cost: Cost) -> Cost {
    (cost * 1000.0).round() / 1000.0
}

/// Returns `true` if two totals agree within [`COST_TOLERANCE`].
#[inline(always)]
pub fn within_tolerance(a: Cost, b: Cost) -> bool {
    (a - b).abs() < COST_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round3_truncates_to_fixture_precision() {
        assert_eq!(round3(102.710678118654755), 102.711);
        assert_eq!(round3(90.7106781), 90.711);
        assert_eq!(round3(10.0), 10.0);
    }

    #[test]
    fn tolerance_is_strict() {
        assert!(within_tolerance(102.711, 102.710678118654755));
        assert!(!within_tolerance(102.711, 102.713));
    }
}
