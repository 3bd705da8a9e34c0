//! Indentation shifter.
//!
//! Operates line-by-line over every line the span touches (closed interval
//! `[span.start, span.end]`), batching the per-line edits into one buffer
//! mutation so line numbers stay stable relative to the pre-edit snapshot.
//! The asymmetry between the two directions is deliberate and load-bearing:
//! shifting right always inserts exactly `width` spaces, shifting left
//! removes at most `width` leading whitespace characters, because
//! de-indentation cannot assume uniform prior indentation.

use core_snapshot::{EditBatch, Snapshot, SnapshotBuffer, SnapshotError, Span};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How `shift_left` counts a tab toward the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPolicy {
    /// A tab is one whitespace unit.
    #[default]
    SingleUnit,
    /// One tab satisfies the whole remaining width, the way tab-stop
    /// expansion treats it when dedenting.
    TabStop,
}

/// Insert `width` spaces at the start of every line the span touches.
///
/// Empty lines included: the spaces become their entire content. Repeated
/// calls keep adding; this is not a toggle.
pub fn shift_right(
    buffer: &mut SnapshotBuffer,
    span: Span,
    width: usize,
) -> Result<Snapshot, SnapshotError> {
    let snapshot = buffer.snapshot();
    let (first, last) = touched_lines(&snapshot, span)?;
    if width == 0 {
        return Ok(snapshot);
    }
    let pad = " ".repeat(width);
    let mut batch = EditBatch::new(&snapshot);
    for number in first..=last {
        batch.insert(snapshot.line(number)?.start(), pad.clone());
    }
    let next = buffer.apply(batch)?;
    trace!(target: "edit.indent", op = "shift_right", first, last, width, version = next.version(), "shifted lines right");
    Ok(next)
}

/// Remove up to `width` leading whitespace characters from every line the
/// span touches, treating a tab as a single unit.
pub fn shift_left(
    buffer: &mut SnapshotBuffer,
    span: Span,
    width: usize,
) -> Result<Snapshot, SnapshotError> {
    shift_left_with_policy(buffer, span, width, TabPolicy::default())
}

/// [`shift_left`] with an explicit tab policy.
///
/// Stops at the first non-whitespace character on each line; empty lines
/// are left untouched, and non-whitespace content is never removed. A call
/// that finds nothing to remove returns the live snapshot without a
/// version bump.
pub fn shift_left_with_policy(
    buffer: &mut SnapshotBuffer,
    span: Span,
    width: usize,
    policy: TabPolicy,
) -> Result<Snapshot, SnapshotError> {
    let snapshot = buffer.snapshot();
    let (first, last) = touched_lines(&snapshot, span)?;
    let mut batch = EditBatch::new(&snapshot);
    for number in first..=last {
        let line = snapshot.line(number)?;
        let remove = leading_removal(&line.text(), width, policy);
        if remove > 0 {
            let start = line.start();
            batch.delete(Span::new(start, start + remove));
        }
    }
    let next = buffer.apply(batch)?;
    trace!(target: "edit.indent", op = "shift_left", first, last, width, policy = ?policy, version = next.version(), "shifted lines left");
    Ok(next)
}

/// Numbers of the first and last lines intersecting `[span.start, span.end]`.
fn touched_lines(snapshot: &Snapshot, span: Span) -> Result<(usize, usize), SnapshotError> {
    Ok((
        snapshot.line_number_at(span.start)?,
        snapshot.line_number_at(span.end)?,
    ))
}

/// Count of leading characters `shift_left` may remove from `text`.
fn leading_removal(text: &str, width: usize, policy: TabPolicy) -> usize {
    let mut removed = 0;
    let mut budget = width;
    for ch in text.chars() {
        if budget == 0 {
            break;
        }
        match ch {
            ' ' => {
                removed += 1;
                budget -= 1;
            }
            '\t' => {
                removed += 1;
                budget = match policy {
                    TabPolicy::SingleUnit => budget - 1,
                    TabPolicy::TabStop => 0,
                };
            }
            _ => break,
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_removal_counts_spaces() {
        assert_eq!(leading_removal("   foo", 2, TabPolicy::SingleUnit), 2);
        assert_eq!(leading_removal(" foo", 2, TabPolicy::SingleUnit), 1);
        assert_eq!(leading_removal("foo", 2, TabPolicy::SingleUnit), 0);
        assert_eq!(leading_removal("", 2, TabPolicy::SingleUnit), 0);
    }

    #[test]
    fn leading_removal_tab_as_single_unit() {
        assert_eq!(leading_removal("\t\tfoo", 1, TabPolicy::SingleUnit), 1);
        assert_eq!(leading_removal("\t foo", 2, TabPolicy::SingleUnit), 2);
    }

    #[test]
    fn leading_removal_tab_fills_the_stop() {
        assert_eq!(leading_removal("\t  foo", 4, TabPolicy::TabStop), 1);
        assert_eq!(leading_removal(" \t foo", 4, TabPolicy::TabStop), 2);
    }

    #[test]
    fn whitespace_only_line_never_loses_more_than_width() {
        assert_eq!(leading_removal("    ", 2, TabPolicy::SingleUnit), 2);
    }

    #[test]
    fn right_on_empty_line_becomes_all_spaces() {
        let mut buf = core_snapshot::SnapshotBuffer::from_str("");
        let span = buf.current().line(0).unwrap().extent();
        let next = shift_right(&mut buf, span, 2).unwrap();
        assert_eq!(next.text(), "  ");
    }

    #[test]
    fn zero_width_is_a_noop() {
        let mut buf = core_snapshot::SnapshotBuffer::from_str("foo");
        let span = buf.current().line(0).unwrap().extent();
        let next = shift_right(&mut buf, span, 0).unwrap();
        assert_eq!(next.version(), 0);
        assert_eq!(next.text(), "foo");
    }
}
