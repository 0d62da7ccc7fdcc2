//! Heading text to filename and anchor slugs.
//!
//! Two independent transforms: one for the filename each section is written to, one for the
//! GitHub-style fragment a heading would get when rendered in place. They agree on ordinary
//! headings but are kept separate because callers rely on each exact form.

/// Extension appended to every section filename.
pub const SECTION_EXTENSION: &str = "md";

/// Fallback stem for headings that slugify to nothing.
pub const UNTITLED: &str = "untitled";

#[must_use]
/// Turn heading text into a URL-safe section filename ending in `.md`.
///
/// Characters other than ASCII letters, digits, whitespace and `-` are dropped, then every run
/// of whitespace and hyphens becomes a single `-`.
pub fn slugify_filename(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut stem = String::with_capacity(lowered.len());
    let mut pending_sep = false;

    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            pending_sep = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_sep && !stem.is_empty() {
                stem.push('-');
            }
            pending_sep = false;
            stem.push(c);
        }
    }

    if stem.is_empty() {
        stem.push_str(UNTITLED);
    }
    format!("{stem}.{SECTION_EXTENSION}")
}

#[must_use]
/// Turn heading text into a GitHub-style in-page anchor, including the leading `#`.
///
/// Whitespace runs become hyphens before anything is stripped, so `"a & b"` passes through
/// `"a-&-b"` and `"a--b"` on its way to `"#a-b"`.
pub fn slugify_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                hyphenated.push('-');
            }
            in_space = true;
        } else {
            in_space = false;
            hyphenated.push(c);
        }
    }

    let kept = hyphenated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-');

    let mut anchor = String::from("#");
    for c in kept {
        if c == '-' && anchor.ends_with('-') {
            continue;
        }
        anchor.push(c);
    }

    let body = anchor[1..].trim_matches('-').to_string();
    format!("#{body}")
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
