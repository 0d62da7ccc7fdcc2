use super::{absolute_url, parse_toc, relink_toc, TocEntry, TocLink, TocWriter};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_absolute_url_strips_trailing_slashes() {
    assert_eq!(
        absolute_url("https://example.com", "/docs", "intro.md"),
        "https://example.com/docs/intro.md"
    );
    assert_eq!(
        absolute_url("https://example.com/", "/docs/", "intro.md"),
        "https://example.com/docs/intro.md"
    );
    assert_eq!(
        absolute_url("https://example.com", "", "intro.md"),
        "https://example.com/intro.md"
    );
}

#[test]
fn test_entry_indentation_follows_level() {
    let top = TocEntry::new(1, "Top", "u1".to_string());
    let nested = TocEntry::new(3, "Nested", "u3".to_string());

    assert_eq!(top.indent_level, 0);
    assert_eq!(top.render(), "- [Top](u1)\n");
    assert_eq!(nested.indent_level, 2);
    assert_eq!(nested.render(), "    - [Nested](u3)\n");
}

#[test]
fn test_writer_creates_parent_and_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/dir/llms.txt");

    let mut writer = TocWriter::create(&path).unwrap();
    writer
        .push(&TocEntry::new(1, "A", "https://x/a.md".to_string()))
        .unwrap();
    writer
        .push(&TocEntry::new(2, "B", "https://x/b.md".to_string()))
        .unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "# Table of Contents\n\n- [A](https://x/a.md)\n  - [B](https://x/b.md)\n"
    );
}

#[test]
fn test_writer_with_no_entries_has_only_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("llms.txt");

    TocWriter::create(&path).unwrap().finish().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# Table of Contents\n\n");
}

#[test]
fn test_parse_simple_toc() {
    let toc = "- [Introduction](#introduction)
- [Getting Started](#getting-started)
  - [Installation](#installation)
  - [Usage](#usage)";

    let links = parse_toc(toc);

    assert_eq!(links.len(), 4);
    assert_eq!(
        links[0],
        TocLink {
            title: "Introduction".to_string(),
            level: 1,
            target: "#introduction".to_string(),
        }
    );
    assert_eq!(links[1].level, 1);
    assert_eq!(links[2].title, "Installation");
    assert_eq!(links[2].level, 2);
    assert_eq!(links[3].target, "#usage");
}

#[test]
fn test_parse_generated_toc_skips_header() {
    let toc = "# Table of Contents\n\n- [A](https://x/a.md)\n    - [C](https://x/c.md)\n";
    let links = parse_toc(toc);

    assert_eq!(links.len(), 2);
    assert_eq!(links[1].level, 3);
    assert_eq!(links[1].target, "https://x/c.md");
}

#[test]
fn test_parse_empty_and_malformed() {
    assert!(parse_toc("").is_empty());
    assert!(parse_toc("This is not a valid TOC").is_empty());
}

#[test]
fn test_relink_mapped_anchors() {
    let toc = "- [Introduction](#introduction)\n- [Getting Started](#getting-started)";
    let mapping = HashMap::from([
        ("#introduction".to_string(), "introduction.md".to_string()),
        ("#getting-started".to_string(), "getting-started.md".to_string()),
    ]);

    let relinked = relink_toc(toc, &mapping, "https://example.com", "/docs");

    assert_eq!(
        relinked,
        "- [Introduction](https://example.com/docs/introduction.md)\n- [Getting Started](https://example.com/docs/getting-started.md)"
    );
}

#[test]
fn test_relink_leaves_unmapped_anchors() {
    let toc = "- [Introduction](#introduction)";
    let relinked = relink_toc(toc, &HashMap::new(), "https://example.com", "/docs");
    assert_eq!(relinked, toc);
}
