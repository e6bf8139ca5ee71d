//! Simulation Statistics.
//!
//! Tracks what the machine retired during a run and reports it at exit.
//! Counters are plain fields; the run loop updates them inline.

/// Counters accumulated over one simulation run.
#[derive(Debug, Default, Clone)]
pub struct SimStats {
    /// Instructions retired (handlers that completed without faulting).
    pub instructions: u64,
}

impl SimStats {
    /// Prints the statistics summary to stderr.
    pub fn print(&self) {
        eprintln!("[Stats] Instructions retired: {}", self.instructions);
    }
}
