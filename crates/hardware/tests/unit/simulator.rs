//! Simulation Host Wrapper Tests.
//!
//! End-to-end file runs and the host-imposed instruction budget.

use std::io::Write;

use pretty_assertions::assert_eq;

use ls8_core::Config;
use ls8_core::sim::{RunOutcome, Simulator};

use crate::common::harness::CaptureSink;

#[test]
fn runs_a_program_file_to_halt() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n").expect("write");

    let sink = CaptureSink::default();
    let mut sim = Simulator::with_sink(&Config::default(), Box::new(sink.clone()));
    sim.load_file(file.path()).expect("load");

    assert_eq!(sim.run(), Ok(RunOutcome::Halted));
    assert_eq!(sink.values(), vec![8]);
}

#[test]
fn budget_stops_a_non_halting_program() {
    let config = Config {
        max_instructions: Some(100),
        ..Config::default()
    };
    let sink = CaptureSink::default();
    let mut sim = Simulator::with_sink(&config, Box::new(sink));

    // Tight loop: JMP back to itself via R0.
    sim.cpu
        .load(&[0b1000_0010, 0, 3, 0b0101_0100, 0])
        .expect("load");

    assert_eq!(sim.run(), Ok(RunOutcome::BudgetExhausted));
    assert_eq!(sim.cpu.stats.instructions, 100);
    assert!(sim.cpu.running, "budget exhaustion is not a machine halt");
}

#[test]
fn budget_does_not_cut_short_a_halting_program() {
    let config = Config {
        max_instructions: Some(100),
        ..Config::default()
    };
    let sink = CaptureSink::default();
    let mut sim = Simulator::with_sink(&config, Box::new(sink));
    sim.cpu.load(&[0b0000_0001]).expect("load");

    assert_eq!(sim.run(), Ok(RunOutcome::Halted));
    assert_eq!(sim.cpu.stats.instructions, 1);
}
