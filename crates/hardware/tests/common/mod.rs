/// Test context and output capture.
pub mod harness;
