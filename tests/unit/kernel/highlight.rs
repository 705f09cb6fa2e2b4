use super::*;
use crate::kernel::diff::diff;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn marks(a: &[String], b: &[String]) -> Highlights {
    compute_highlights(&diff(a, b), a, b)
}

fn set(items: &[usize]) -> BTreeSet<usize> {
    items.iter().copied().collect()
}

#[test]
fn changed_middle_line_is_marked_on_both_sides() {
    let a = lines(&["a\n", "b\n", "c\n"]);
    let b = lines(&["a\n", "x\n", "c\n"]);
    let h = marks(&a, &b);
    assert_eq!(h.original, set(&[2]));
    assert_eq!(h.modified, set(&[2]));
    assert!(!h.is_marked(BufferSide::Original, 1));
    assert!(!h.is_marked(BufferSide::Modified, 3));
}

#[test]
fn empty_original_marks_only_added_line() {
    let a = lines(&[]);
    let b = lines(&["hello\n"]);
    let h = marks(&a, &b);
    assert!(h.original.is_empty());
    assert_eq!(h.modified, set(&[1]));
}

#[test]
fn removed_trailing_line_marks_original_only() {
    let a = lines(&["a\n", "b\n", "c\n"]);
    let b = lines(&["a\n", "b\n"]);
    let h = marks(&a, &b);
    assert_eq!(h.original, set(&[3]));
    assert!(h.modified.is_empty());
}

#[test]
fn equal_buffers_have_no_marks() {
    let a = lines(&["one\n", "two\n"]);
    assert!(marks(&a, &a).is_empty());
}

#[test]
fn unchanged_lines_never_marked_when_lines_are_distinct() {
    let a = lines(&["1\n", "2\n", "3\n", "4\n", "5\n"]);
    let b = lines(&["1\n", "two\n", "3\n", "5\n", "6\n"]);
    let ops = diff(&a, &b);
    let h = compute_highlights(&ops, &a, &b);

    for op in ops.iter().filter(|op| op.kind == DiffKind::Unchanged) {
        let o = op.original_index.unwrap() + 1;
        let m = op.modified_index.unwrap() + 1;
        assert!(!h.is_marked(BufferSide::Original, o));
        assert!(!h.is_marked(BufferSide::Modified, m));
    }
    assert_eq!(h.original, set(&[2, 4]));
    assert_eq!(h.modified, set(&[2, 5]));
}

#[test]
fn duplicate_text_maps_to_first_occurrence() {
    // The removed line is the second "x", but lookup by content lands on
    // the first one.
    let a = lines(&["x\n", "y\n", "x\n"]);
    let b = lines(&["x\n", "y\n"]);
    let h = marks(&a, &b);
    assert_eq!(h.original, set(&[1]));
    assert!(h.modified.is_empty());
}

#[test]
fn aligned_mapping_marks_true_position_of_duplicate() {
    let a = lines(&["x\n", "y\n", "x\n"]);
    let b = lines(&["x\n", "y\n"]);
    let ops = diff(&a, &b);
    let h = compute_highlights_with(HighlightMapping::Aligned, &ops, &a, &b);
    assert_eq!(h.original, set(&[3]));
}

#[test]
fn side_helpers() {
    assert_eq!(BufferSide::Original.other(), BufferSide::Modified);
    assert_eq!(BufferSide::Modified.index(), 1);
    assert_eq!(BufferSide::ALL[0].label(), "Original");
}
