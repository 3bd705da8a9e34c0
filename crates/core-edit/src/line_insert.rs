//! Line insertion engine.
//!
//! Inserts an empty line directly above or below an existing one by
//! splicing the snapshot's canonical break sequence at the line boundary.
//! Break bookkeeping is re-derived from the post-edit snapshot rather than
//! carried over from the pre-edit state: inserting below the break-less
//! last line turns it into a properly terminated line and leaves the new
//! final line break-less.

use core_snapshot::{EditBatch, Line, SnapshotBuffer, SnapshotError};
use tracing::trace;

/// Insert an empty line immediately after `line`.
///
/// The original line keeps its text and terminates with the canonical
/// break (gaining one when it was the last line); the returned handle
/// addresses the new empty line at `line.number() + 1`, resolved against
/// the new snapshot.
pub fn add_line_below(buffer: &mut SnapshotBuffer, line: &Line) -> Result<Line, SnapshotError> {
    ensure_current(buffer, line)?;
    let number = line.number();
    let at = line.end();
    let brk = buffer.current().line_break();
    let mut batch = EditBatch::new(buffer.current());
    batch.insert(at, brk.as_str());
    let next = buffer.apply(batch)?;
    trace!(target: "edit.line_insert", op = "add_line_below", line = number, at, version = next.version(), "inserted empty line");
    next.line(number + 1)
}

/// Insert an empty line immediately before `line`.
///
/// The new empty line takes over `line.number()`; the original content
/// shifts down one line unchanged.
pub fn add_line_above(buffer: &mut SnapshotBuffer, line: &Line) -> Result<Line, SnapshotError> {
    ensure_current(buffer, line)?;
    let number = line.number();
    let at = line.start();
    let brk = buffer.current().line_break();
    let mut batch = EditBatch::new(buffer.current());
    batch.insert(at, brk.as_str());
    let next = buffer.apply(batch)?;
    trace!(target: "edit.line_insert", op = "add_line_above", line = number, at, version = next.version(), "inserted empty line");
    next.line(number)
}

// A line handle from a superseded snapshot would address the wrong text;
// callers must re-resolve after every edit.
fn ensure_current(buffer: &SnapshotBuffer, line: &Line) -> Result<(), SnapshotError> {
    let resolved = line.snapshot().version();
    let current = buffer.current().version();
    if resolved != current {
        return Err(SnapshotError::StaleSnapshot { resolved, current });
    }
    Ok(())
}
