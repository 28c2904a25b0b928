/// Bookkeeping for one solver run, filled when the caller opts in.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// States popped from the frontier.
    pub pops: usize,
    /// Popped states discarded by lazy deletion.
    pub stale_pops: usize,
    /// Relaxations that improved a best-known cost (each one pushes).
    pub relaxations: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}
