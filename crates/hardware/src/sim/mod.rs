//! Program Loading and Simulation Hosting.
//!
//! This module wraps the core machine for hosts. It provides:
//! 1. **Loader:** Parses textual LS-8 programs into memory images ([`loader`]).
//! 2. **Simulator:** Drives the CPU to completion under an optional
//!    instruction budget ([`simulator`]).

/// Textual program loader.
pub mod loader;

/// Host wrapper around the CPU.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};
