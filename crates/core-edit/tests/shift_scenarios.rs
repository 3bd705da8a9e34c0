mod common;

use common::{buffer, line_texts};
use core_edit::{TabPolicy, shift_left, shift_left_with_policy, shift_right};
use core_snapshot::Span;
use pretty_assertions::assert_eq;

#[test]
fn right_indents_a_single_line() {
    let mut buf = buffer(&["foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_right(&mut buf, span, 2).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "  foo");
}

#[test]
fn right_accumulates_on_repeat() {
    let mut buf = buffer(&["foo"]);
    let span = buf.current().line(0).unwrap().extent();
    shift_right(&mut buf, span, 2).unwrap();
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_right(&mut buf, span, 2).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "    foo");
}

#[test]
fn right_covers_every_touched_line_in_one_edit() {
    let mut buf = buffer(&["foo", "bar"]);
    let span = Span::new(
        buf.current().line(0).unwrap().start(),
        buf.current().line(1).unwrap().end(),
    );
    let next = shift_right(&mut buf, span, 1).unwrap();
    assert_eq!(line_texts(&next), vec![" foo", " bar"]);
    assert_eq!(next.version(), 1);
}

#[test]
fn span_ending_at_next_line_start_touches_that_line() {
    let mut buf = buffer(&["foo", "bar"]);
    let next = shift_right(&mut buf, Span::new(0, 4), 1).unwrap();
    assert_eq!(line_texts(&next), vec![" foo", " bar"]);
}

#[test]
fn span_ending_on_the_break_stays_on_its_line() {
    let mut buf = buffer(&["foo", "bar"]);
    let next = shift_right(&mut buf, Span::new(0, 3), 1).unwrap();
    assert_eq!(line_texts(&next), vec![" foo", "bar"]);
}

#[test]
fn left_only_removes_whitespace() {
    let mut buf = buffer(&["foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "foo");
    // Nothing removable, so no new snapshot version either.
    assert_eq!(next.version(), 0);
}

#[test]
fn left_on_empty_line_is_a_noop() {
    let mut buf = buffer(&[""]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "");
}

#[test]
fn left_dedents_both_lines_atomically() {
    let mut buf = buffer(&["  foo", "  bar"]);
    let span = Span::new(
        buf.current().line(0).unwrap().start(),
        buf.current().line(1).unwrap().end(),
    );
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(line_texts(&next), vec!["foo", "bar"]);
    assert_eq!(next.version(), 1);
}

#[test]
fn left_removes_at_most_width() {
    let mut buf = buffer(&["   foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(next.line(0).unwrap().text(), " foo");
}

#[test]
fn left_stops_early_at_nonwhitespace() {
    let mut buf = buffer(&[" foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left(&mut buf, span, 3).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "foo");
}

#[test]
fn right_then_left_round_trips() {
    let mut buf = buffer(&["foo", "  bar"]);
    let original = line_texts(buf.current());
    let span = Span::new(0, buf.current().len_chars());
    shift_right(&mut buf, span, 2).unwrap();
    let span = Span::new(0, buf.current().len_chars());
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(line_texts(&next), original);
}

#[test]
fn mixed_indentation_dedents_unevenly() {
    let mut buf = buffer(&["    deep", " shallow", "flat", ""]);
    let span = Span::new(0, buf.current().len_chars());
    let next = shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(line_texts(&next), vec!["  deep", "shallow", "flat", ""]);
    assert_eq!(next.version(), 1);
}

#[test]
fn tab_counts_as_one_unit_by_default() {
    let mut buf = buffer(&["\t\tfoo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left(&mut buf, span, 1).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "\tfoo");
}

#[test]
fn tab_satisfies_the_stop_under_tab_stop_policy() {
    let mut buf = buffer(&["\t  foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left_with_policy(&mut buf, span, 4, TabPolicy::TabStop).unwrap();
    assert_eq!(next.line(0).unwrap().text(), "  foo");
}

#[test]
fn spaces_before_tab_share_the_stop() {
    let mut buf = buffer(&[" \t foo"]);
    let span = buf.current().line(0).unwrap().extent();
    let next = shift_left_with_policy(&mut buf, span, 4, TabPolicy::TabStop).unwrap();
    assert_eq!(next.line(0).unwrap().text(), " foo");
}

#[test]
fn old_snapshot_unaffected_by_shift() {
    common::init_tracing();
    let mut buf = buffer(&["  foo"]);
    let old = buf.snapshot();
    let span = old.line(0).unwrap().extent();
    shift_left(&mut buf, span, 2).unwrap();
    assert_eq!(old.line(0).unwrap().text(), "  foo");
    assert_eq!(buf.current().line(0).unwrap().text(), "foo");
}
