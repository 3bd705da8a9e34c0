//! Session-scoped editing state: motion/operation classification and the
//! register store.
//!
//! An [`EditSession`] owns the process-wide mutable state the mutation
//! engines share (registers plus their write metrics) and is passed to them
//! explicitly, keeping the engines testable in isolation and allowing
//! multiple independent sessions in one process. All of it is touched only
//! from the single logical editing thread the host guarantees; there is no
//! internal locking.

pub mod registers;

pub use registers::{
    RegisterMetrics, RegisterMetricsSnapshot, RegisterValue, Registers, RegistersFacade,
};

/// Whether a motion's end offset is part of the affected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// The end offset is included: the affected range extends one character
    /// past the span's end when that character exists.
    Inclusive,
    /// The span is taken verbatim, end-exclusive.
    Exclusive,
}

/// Granularity at which an operation's payload is interpreted.
///
/// Spans reach the engines already resolved by the caller; this tag rides
/// along into the register so paste logic downstream can distinguish
/// whole-line payloads from character runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    CharacterWise,
    LineWise,
}

/// Long-lived editing session context.
///
/// Owns the register table and its metrics; created once per session and
/// threaded through the deletion/yank engines rather than living as an
/// implicit global.
#[derive(Debug, Default, Clone)]
pub struct EditSession {
    registers: Registers,
    metrics: RegisterMetrics,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the register table.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Combined register + metrics write path.
    pub fn registers_facade(&mut self) -> RegistersFacade<'_> {
        RegistersFacade::new(&mut self.registers, &mut self.metrics)
    }

    /// Counter read-out for diagnostics surfaces.
    pub fn metrics(&self) -> RegisterMetricsSnapshot {
        self.metrics.snapshot()
    }
}
