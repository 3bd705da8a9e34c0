#![allow(dead_code)] // Shared across integration test binaries; each uses a subset of helpers.

use core_snapshot::{LineBreak, Snapshot, SnapshotBuffer};

pub fn buffer(lines: &[&str]) -> SnapshotBuffer {
    SnapshotBuffer::from_lines(lines)
}

pub fn buffer_crlf(lines: &[&str]) -> SnapshotBuffer {
    SnapshotBuffer::from_lines_with_break(lines, LineBreak::CrLf)
}

pub fn line_texts(snapshot: &Snapshot) -> Vec<String> {
    snapshot.lines().map(|line| line.text()).collect()
}

/// Opt-in tracing output for debugging a failing test (RUST_LOG=trace).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
