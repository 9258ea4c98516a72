use pretty_assertions::assert_eq;

use super::*;
use crate::ToSource;

fn ws(body: &str) -> Option<Whitespace> {
    Some(Whitespace::new(body))
}

// === Whitespace ===

#[test]
fn from_run_empty_is_absent() {
    assert_eq!(Whitespace::from_run(b""), None);
    assert_eq!(Whitespace::from_run(b" \t"), ws(" \t"));
}

#[test]
fn whitespace_debug_is_quoted() {
    assert_eq!(format!("{:?}", Whitespace::new(" \r\n")), r#"" \r\n""#);
}

#[test]
fn whitespace_has_newline() {
    assert!(Whitespace::new("\r").has_newline());
    assert!(Whitespace::new(" \n").has_newline());
    assert!(!Whitespace::new(" \t ").has_newline());
}

// === Reconstruction ===

#[test]
fn single_line_to_source() {
    let comment = SingleLineComment {
        pre_open: ws("\t"),
        post_open: ws(" "),
        body: b"foobar".to_vec(),
        post_body: ws(" \r\n"),
    };
    assert_eq!(comment.to_source(), b"\t// foobar \r\n");
}

#[test]
fn empty_single_line_to_source() {
    assert_eq!(SingleLineComment::default().to_source(), b"//");
}

#[test]
fn multi_line_to_source() {
    let comment = MultiLineComment {
        pre_open: ws("\t "),
        body: b" foobar \n\t baz ".to_vec(),
        post_body: ws("\n"),
    };
    assert_eq!(comment.to_source(), b"\t /* foobar \n\t baz */\n");
    assert_eq!(MultiLineComment::default().to_source(), b"/**/");
}

#[test]
fn file_to_source_concatenates_children() {
    let file = File::new(
        "a.mg",
        vec![
            Node::Whitespace(Whitespace::new("\n\n")),
            SingleLineComment {
                post_open: ws(" "),
                body: b"one".to_vec(),
                post_body: ws("\n"),
                ..Default::default()
            }
            .into(),
            MultiLineComment {
                body: b"two".to_vec(),
                ..Default::default()
            }
            .into(),
        ],
    );
    assert_eq!(file.to_source(), b"\n\n// one\n/*two*/");
}

// === Containers ===

#[test]
fn file_body_ignores_whitespace() {
    let blank = File::new("blank.mg", vec![Whitespace::new(" \n").into()]);
    assert!(!blank.has_body());

    let commented = File::new(
        "c.mg",
        vec![
            Whitespace::new(" \n").into(),
            SingleLineComment::default().into(),
        ],
    );
    assert!(commented.has_body());
}

#[test]
fn module_file_lookup() {
    let mut module = Module::new("dirname");
    module.files.push(File::new("a.mg", Vec::new()));
    module.files.push(File::new("b.mg", Vec::new()));
    assert_eq!(module.file("b.mg").map(|f| f.name.as_str()), Some("b.mg"));
    assert!(module.file("c.mg").is_none());
}

#[test]
fn comment_debug_shows_text_body() {
    let comment = SingleLineComment {
        body: b"foobar".to_vec(),
        ..Default::default()
    };
    let rendered = format!("{comment:?}");
    assert!(rendered.contains(r#"body: "foobar""#), "{rendered}");
    assert_eq!(comment.body_text(), "foobar");
    assert_eq!(Node::from(comment).kind_name(), "single-line comment");
}
