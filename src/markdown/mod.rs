//! Conversion of markdown-like text into the section model.
//!
//! The upstream text generator emits loosely structured markdown: `##`
//! headings, `-`/`*` bullets, plain paragraphs. This module folds that
//! into [`Section`]s in a single line-oriented pass. The conversion is
//! lossy and best-effort by design — nested lists, inline emphasis,
//! tables and code fences pass through as literal paragraph text.

use crate::docx::model::{Paragraph, Section};

/// Title of the implicit section that collects content appearing before
/// the first `##` heading.
const IMPLICIT_SECTION_TITLE: &str = "General";

/// Convert markdown-like text into ordered sections.
///
/// Returns an empty Vec for input with no content at all; callers that
/// need a non-empty document are responsible for their own fallback
/// (e.g. wrapping the raw text in a single synthetic section).
///
/// # Examples
///
/// ```rust
/// use shedoc::convert_markdown_to_sections;
///
/// let sections = convert_markdown_to_sections("## Scope\n- item one");
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].title, "Scope");
/// assert!(sections[0].paragraphs[0].is_bullet);
/// ```
pub fn convert_markdown_to_sections(markdown: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in markdown.lines() {
        if let Some(title) = heading_text(line) {
            sections.push(Section::new(title));
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let paragraph = match bullet_text(line) {
            Some(text) => Paragraph::bullet(text),
            None => Paragraph::new(line.trim()),
        };

        if sections.is_empty() {
            sections.push(Section::new(IMPLICIT_SECTION_TITLE));
        }
        sections
            .last_mut()
            .expect("a current section always exists here")
            .paragraphs
            .push(paragraph);
    }

    sections
}

/// Match a `## ` heading at the start of the line and return its title.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    // "##Foo" and "### Foo" are not level-two headings; they fall through
    // as plain text.
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Match a `- ` or `* ` bullet marker and return the stripped text.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let rest = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('*'))?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_bullets_and_plain_text() {
        let sections =
            convert_markdown_to_sections("## Scope\n- item one\n- item two\n\nPlain line");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Scope");

        let paragraphs = &sections[0].paragraphs;
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], Paragraph::bullet("item one"));
        assert_eq!(paragraphs[1], Paragraph::bullet("item two"));
        assert_eq!(paragraphs[2], Paragraph::new("Plain line"));
    }

    #[test]
    fn test_content_before_heading_goes_to_general() {
        let sections = convert_markdown_to_sections("just text");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "General");
        assert_eq!(sections[0].paragraphs, vec![Paragraph::new("just text")]);
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(convert_markdown_to_sections("").is_empty());
        assert!(convert_markdown_to_sections("\n\n  \n").is_empty());
    }

    #[test]
    fn test_multiple_sections_in_order() {
        let sections = convert_markdown_to_sections("## A\none\n## B\ntwo\n## C\nthree");
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(sections[1].paragraphs, vec![Paragraph::new("two")]);
    }

    #[test]
    fn test_asterisk_bullets() {
        let sections = convert_markdown_to_sections("## L\n* starred");
        assert_eq!(sections[0].paragraphs, vec![Paragraph::bullet("starred")]);
    }

    #[test]
    fn test_indented_bullet_still_matches() {
        let sections = convert_markdown_to_sections("## L\n  - indented");
        assert_eq!(sections[0].paragraphs, vec![Paragraph::bullet("indented")]);
    }

    #[test]
    fn test_deeper_heading_is_plain_text() {
        let sections = convert_markdown_to_sections("### Subheading");
        assert_eq!(sections[0].title, "General");
        assert_eq!(
            sections[0].paragraphs,
            vec![Paragraph::new("### Subheading")]
        );
    }

    #[test]
    fn test_marker_without_space_is_plain_text() {
        let sections = convert_markdown_to_sections("-not a bullet");
        assert_eq!(
            sections[0].paragraphs,
            vec![Paragraph::new("-not a bullet")]
        );
    }

    #[test]
    fn test_inline_markup_passes_through() {
        let sections = convert_markdown_to_sections("**bold** and _italic_");
        assert_eq!(
            sections[0].paragraphs,
            vec![Paragraph::new("**bold** and _italic_")]
        );
    }

    #[test]
    fn test_indented_heading_is_plain_text() {
        let sections = convert_markdown_to_sections("  ## Not A Heading");
        assert_eq!(sections[0].title, "General");
        assert_eq!(
            sections[0].paragraphs,
            vec![Paragraph::new("## Not A Heading")]
        );
    }
}
