use std::cell::RefCell;
use std::rc::Rc;

use ls8_core::Config;
use ls8_core::core::cpu::{Cpu, OutputSink};

/// Output sink that records every emitted value for later assertions.
///
/// Clones share the same buffer, so the harness can keep a handle while the
/// CPU owns the boxed sink.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    values: Rc<RefCell<Vec<u8>>>,
}

impl CaptureSink {
    /// Returns everything emitted so far.
    pub fn values(&self) -> Vec<u8> {
        self.values.borrow().clone()
    }
}

impl OutputSink for CaptureSink {
    fn emit(&mut self, value: u8) {
        self.values.borrow_mut().push(value);
    }
}

/// Owns a CPU wired to a [`CaptureSink`] for whole-program assertions.
pub struct TestContext {
    pub cpu: Cpu,
    sink: CaptureSink,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let sink = CaptureSink::default();
        let cpu = Cpu::new(&Config::default(), Box::new(sink.clone()));
        Self { cpu, sink }
    }

    /// Builds a context with `program` already loaded at address 0.
    pub fn with_program(program: &[u8]) -> Self {
        let mut ctx = Self::new();
        ctx.cpu.load(program).expect("program fits in memory");
        ctx
    }

    /// Everything `PRN` emitted so far.
    pub fn output(&self) -> Vec<u8> {
        self.sink.values()
    }
}
