use super::*;

#[test]
fn split_keeps_terminators() {
    let buf = LineBuffer::from_text("a\nb\r\nc");
    assert_eq!(buf.lines(), &["a\n", "b\r\n", "c"]);
}

#[test]
fn empty_text_has_no_lines() {
    let buf = LineBuffer::from_text("");
    assert!(buf.is_empty());
    assert_eq!(buf.to_text(), "");
}

#[test]
fn join_reproduces_source_bytes() {
    for text in ["x\n", "x\ny", "\n\n", "a\r\nb\r\n", "no newline"] {
        assert_eq!(LineBuffer::from_text(text).to_text(), text);
    }
}

#[test]
fn trimmed_text_strips_outer_whitespace_only() {
    let buf = LineBuffer::from_text("\n  fn main() {\n    x();\n  }\n\n");
    assert_eq!(buf.trimmed_text(), "fn main() {\n    x();\n  }");
}
