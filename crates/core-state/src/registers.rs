//! Named register slots and their write path.
//!
//! Registers hold the last deleted or yanked text together with the
//! operation kind it was captured under. Slots are created on first write,
//! overwritten by every later write to the same name (last-writer-wins, no
//! merging), and never implicitly cleared; they live for the session
//! lifetime. Writes go through [`RegistersFacade`] so the metrics counters
//! stay in step with the table.

use std::collections::HashMap;

use tracing::trace;

use crate::OperationKind;

/// Payload of one register slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterValue {
    pub text: String,
    pub kind: OperationKind,
}

/// Name → value table, keyed by a single identifying character.
#[derive(Debug, Default, Clone)]
pub struct Registers {
    slots: HashMap<char, RegisterValue>,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the named slot, if it has ever been written.
    pub fn get(&self, name: char) -> Option<&RegisterValue> {
        self.slots.get(&name)
    }

    /// Overwrite the named slot.
    pub fn set(&mut self, name: char, text: impl Into<String>, kind: OperationKind) {
        self.slots.insert(
            name,
            RegisterValue {
                text: text.into(),
                kind,
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterate populated slots (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (char, &RegisterValue)> {
        self.slots.iter().map(|(name, value)| (*name, value))
    }
}

/// Counters over register traffic.
///
/// Plain u64 fields mutated on the editing thread only; a multi-writer
/// future can upgrade to atomics.
#[derive(Debug, Default, Clone)]
pub struct RegisterMetrics {
    deletes: u64,
    yanks: u64,
    register_writes: u64,
}

/// `Copy` read-out of [`RegisterMetrics`] for diagnostics surfaces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMetricsSnapshot {
    pub deletes: u64,
    pub yanks: u64,
    pub register_writes: u64,
}

impl RegisterMetrics {
    pub fn snapshot(&self) -> RegisterMetricsSnapshot {
        RegisterMetricsSnapshot {
            deletes: self.deletes,
            yanks: self.yanks,
            register_writes: self.register_writes,
        }
    }

    fn incr_delete(&mut self) {
        self.deletes += 1;
    }

    fn incr_yank(&mut self) {
        self.yanks += 1;
    }

    fn note_register_write(&mut self) {
        self.register_writes += 1;
    }
}

/// Facade concentrating register write semantics.
///
/// Callers never reach into the table for ad-hoc mutations; the facade
/// applies the overwrite and keeps the metrics counters consistent with it.
pub struct RegistersFacade<'session> {
    registers: &'session mut Registers,
    metrics: &'session mut RegisterMetrics,
}

impl<'session> RegistersFacade<'session> {
    pub fn new(
        registers: &'session mut Registers,
        metrics: &'session mut RegisterMetrics,
    ) -> Self {
        Self { registers, metrics }
    }

    /// Record a delete payload into the named slot.
    pub fn write_delete(&mut self, name: char, text: impl Into<String>, kind: OperationKind) {
        self.metrics.incr_delete();
        self.write(name, text.into(), kind);
    }

    /// Record a yank (non-destructive capture) into the named slot.
    pub fn write_yank(&mut self, name: char, text: impl Into<String>, kind: OperationKind) {
        self.metrics.incr_yank();
        self.write(name, text.into(), kind);
    }

    fn write(&mut self, name: char, text: String, kind: OperationKind) {
        trace!(target: "state.registers", register = %name, len = text.len(), kind = ?kind, "register write");
        self.registers.set(name, text, kind);
        self.metrics.note_register_write();
    }
}
