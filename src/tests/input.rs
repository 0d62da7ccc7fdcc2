use super::{extract_headings, read_source, HeadingEvent};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use std::io::Write;
use tempfile::NamedTempFile;

fn headings(source: &str) -> Vec<HeadingEvent> {
    extract_headings(source, &MarkdownFormat).unwrap()
}

#[test]
fn test_extract_atx_headings_in_order() {
    let events = headings("# A\nx\n## B\ny\n### C\nz\n");

    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        HeadingEvent {
            level: 1,
            line: 0,
            text: "A".to_string()
        }
    );
    assert_eq!(events[1].level, 2);
    assert_eq!(events[1].line, 2);
    assert_eq!(events[1].text, "B");
    assert_eq!(events[2].level, 3);
    assert_eq!(events[2].line, 4);
    assert_eq!(events[2].text, "C");
}

#[test]
fn test_all_six_levels() {
    let events = headings("# 1\n\n## 2\n\n### 3\n\n#### 4\n\n##### 5\n\n###### 6\n");
    let levels: Vec<u8> = events.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_hash_lines_in_code_fence_are_not_headings() {
    let source = "# Real\n\n```sh\n# just a comment\n```\n\n## Also real\n";
    let events = headings(source);

    let titles: Vec<&str> = events.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(titles, vec!["Real", "Also real"]);
    assert_eq!(events[1].line, 6);
}

#[test]
fn test_inline_markup_kept_raw() {
    let events = headings("## The **bold** `code` title\n");
    assert_eq!(events[0].text, "The **bold** `code` title");
}

#[test]
fn test_setext_headings() {
    let events = headings("Title\n=====\n\nText\n\nSub\n---\n");
    assert_eq!(events.len(), 2);
    assert_eq!((events[0].level, events[0].line), (1, 0));
    assert_eq!(events[0].text, "Title");
    assert_eq!((events[1].level, events[1].line), (2, 5));
    assert_eq!(events[1].text, "Sub");
}

#[test]
fn test_empty_document_has_no_headings() {
    assert!(headings("").is_empty());
    assert!(headings("just a paragraph\n").is_empty());
}

#[test]
fn test_heading_without_text_skipped() {
    let events = headings("#\n\n# Named\n");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].text, "Named");
    assert_eq!(events[0].line, 2);
}

#[test]
fn test_read_source_rejects_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'#', b' ', 0xff, 0xfe, b'\n']).unwrap();

    match read_source(file.path()) {
        Err(Error::Decode { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_read_source_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("# Café\n".as_bytes()).unwrap();
    assert_eq!(read_source(file.path()).unwrap(), "# Café\n");
}
