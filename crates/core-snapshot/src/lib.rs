//! Immutable, versioned text snapshots over a rope.
//!
//! The host editor owns the real buffer storage; this crate supplies the
//! contract surface the mutation engines are written against: a
//! [`SnapshotBuffer`] holding the live [`Snapshot`] and deriving exactly one
//! new version per atomic [`EditBatch`], plus [`Line`] and [`Span`] views
//! scoped to a single snapshot. Old snapshots stay readable after the buffer
//! moves on; the rope makes the per-edit clone cheap.
//!
//! Offsets throughout the API are char offsets.

use ropey::Rope;

mod edit;
mod error;
mod line;
mod span;

pub use edit::{Edit, EditBatch};
pub use error::SnapshotError;
pub use line::{Line, Lines};
pub use span::Span;

/// Canonical line-break convention for one buffer.
///
/// Chosen once at construction and used for every line introduced
/// afterwards, so a buffer never accumulates mixed conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// Unix convention, `"\n"`.
    #[default]
    Lf,
    /// Windows convention, `"\r\n"`.
    CrLf,
}

impl LineBreak {
    /// Detect the convention used by `content`: the first line break wins,
    /// anything else (including an empty buffer) resolves to LF.
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(idx) if idx > 0 && content.as_bytes()[idx - 1] == b'\r' => Self::CrLf,
            _ => Self::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Length of the break sequence in chars (1 or 2).
    pub fn len_chars(self) -> usize {
        self.as_str().len()
    }
}

/// One immutable version of the buffer text.
///
/// `Clone` is cheap (rope node sharing), and clones of superseded versions
/// remain fully readable. Each mutation through [`SnapshotBuffer::apply`]
/// yields a snapshot with a monotonically increasing version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    rope: Rope,
    version: u64,
    line_break: LineBreak,
}

impl Snapshot {
    fn new(rope: Rope, version: u64, line_break: LineBreak) -> Self {
        Self {
            rope,
            version,
            line_break,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Canonical break resolver: every component that introduces a new line
    /// uses this sequence rather than a hardcoded one.
    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Number of lines. An empty buffer still has one (empty) line, and a
    /// trailing break always implies a final empty line after it.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// View of the line at `number`, bound to this snapshot.
    pub fn line(&self, number: usize) -> Result<Line, SnapshotError> {
        if number >= self.line_count() {
            return Err(SnapshotError::LineOutOfRange {
                number,
                count: self.line_count(),
            });
        }
        Ok(Line::new(self.clone(), number))
    }

    /// Iterate all lines in order.
    pub fn lines(&self) -> Lines {
        Lines::new(self.clone())
    }

    /// Line number containing `offset`. An offset equal to `len_chars()`
    /// resolves to the last line.
    pub fn line_number_at(&self, offset: usize) -> Result<usize, SnapshotError> {
        if offset > self.len_chars() {
            return Err(SnapshotError::OutOfRange {
                start: offset,
                end: offset,
                len: self.len_chars(),
            });
        }
        Ok(self.rope.char_to_line(offset))
    }

    /// View of the line containing `offset`.
    pub fn line_at_offset(&self, offset: usize) -> Result<Line, SnapshotError> {
        self.line(self.line_number_at(offset)?)
    }

    /// Extract the text addressed by `span`.
    pub fn slice(&self, span: Span) -> Result<String, SnapshotError> {
        if span.end > self.len_chars() {
            return Err(SnapshotError::OutOfRange {
                start: span.start,
                end: span.end,
                len: self.len_chars(),
            });
        }
        Ok(self.rope.slice(span.start..span.end).to_string())
    }

    /// Full buffer text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub(crate) fn rope(&self) -> &Rope {
        &self.rope
    }
}

/// Single-writer owner of the live snapshot.
///
/// Mutation happens only through [`SnapshotBuffer::apply`], which turns one
/// [`EditBatch`] into exactly one new snapshot version, so readers never
/// observe an intermediate state. The host guarantees a single logical
/// editing thread; no internal locking.
#[derive(Debug, Clone)]
pub struct SnapshotBuffer {
    current: Snapshot,
}

impl SnapshotBuffer {
    /// Build from raw content, detecting the line-break convention.
    pub fn from_str(content: &str) -> Self {
        Self::with_line_break(content, LineBreak::detect(content))
    }

    /// Build from logical lines joined with LF.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::from_lines_with_break(lines, LineBreak::Lf)
    }

    /// Build from logical lines joined with the given break sequence.
    pub fn from_lines_with_break(lines: &[&str], line_break: LineBreak) -> Self {
        Self::with_line_break(&lines.join(line_break.as_str()), line_break)
    }

    pub fn with_line_break(content: &str, line_break: LineBreak) -> Self {
        Self {
            current: Snapshot::new(Rope::from_str(content), 0, line_break),
        }
    }

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Cheap owned handle to the live snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    /// Apply one batch of edits atomically, producing the next snapshot.
    ///
    /// The batch must have been built against the live snapshot, with every
    /// range in bounds and the ranges mutually disjoint; violations are
    /// caller contract errors and are never clamped. An empty batch returns
    /// the live snapshot unchanged, without a version bump.
    pub fn apply(&mut self, batch: EditBatch) -> Result<Snapshot, SnapshotError> {
        if batch.base_version() != self.current.version {
            return Err(SnapshotError::StaleSnapshot {
                resolved: batch.base_version(),
                current: self.current.version,
            });
        }
        if batch.is_empty() {
            return Ok(self.current.clone());
        }
        let len = self.current.len_chars();
        let mut edits = batch.into_edits();
        for edit in &edits {
            if edit.span().end > len {
                return Err(SnapshotError::OutOfRange {
                    start: edit.span().start,
                    end: edit.span().end,
                    len,
                });
            }
        }
        // Apply back-to-front so earlier offsets stay valid without remapping.
        edits.sort_by(|a, b| b.span().start.cmp(&a.span().start));
        for pair in edits.windows(2) {
            if pair[1].span().end > pair[0].span().start {
                return Err(SnapshotError::OverlappingEdits {
                    first: pair[1].span(),
                    second: pair[0].span(),
                });
            }
        }
        let mut rope = self.current.rope.clone();
        for edit in &edits {
            let span = edit.span();
            if !span.is_empty() {
                rope.remove(span.start..span.end);
            }
            if !edit.replacement().is_empty() {
                rope.insert(span.start, edit.replacement());
            }
        }
        self.current = Snapshot::new(rope, self.current.version + 1, self.current.line_break);
        Ok(self.current.clone())
    }
}
