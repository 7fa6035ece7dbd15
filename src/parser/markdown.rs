// src/parser/markdown.rs
// =============================================================================
// This module splits Markdown text into sections.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, text, etc.)
// - Follows the CommonMark specification
// - Is fast and memory-efficient (it's a streaming parser)
//
// Splitting rule:
// - Every heading starts a new section; the heading text becomes the title
// - Text before the first heading becomes a "preamble" section titled after
//   the file itself (level 0)
// - Parsing never fails - pulldown-cmark accepts any input
//
// Rust concepts:
// - Iterators: The parser yields a stream of events
// - Pattern matching: To react to heading/text events
// - Owned vs borrowed strings: Events borrow, sections own
// =============================================================================

use pulldown_cmark::{Event, Parser, Tag};
use serde::{Deserialize, Serialize};

// One structurally coherent unit of a documentation file
//
// Created here with summary = None; the summarization stage fills it in.
// #[derive(Serialize, Deserialize)] lets us persist sections as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Path of the file this section came from (relative to the repo root)
    pub file_path: String,
    /// Heading text, or the file name for preamble text before any heading
    pub title: String,
    /// Heading level (1-6); 0 for the preamble pseudo-section
    pub level: u32,
    /// Body text under the heading, trimmed
    pub content: String,
    /// Filled in by the summarization stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

// Parses Markdown content into sections
//
// Parameters:
//   content: the markdown text (borrowed as &str)
//   file_path: origin path, attached to every produced section
//
// Returns: zero or more sections. Empty input produces an empty Vec.
pub fn parse_markdown_to_sections(content: &str, file_path: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    // State of the section currently being accumulated
    let mut current_title = String::new(); // empty = preamble
    let mut current_level: u32 = 0;
    let mut body = String::new();

    // Heading text arrives as Text events between Start(Heading) and
    // End(Heading), so we track whether we're inside one
    let mut in_heading = false;
    let mut heading_buf = String::new();
    let mut heading_level: u32 = 1;

    for event in Parser::new(content) {
        match event {
            // A new heading closes the section we were building
            Event::Start(Tag::Heading(level, _fragment, _classes)) => {
                flush_section(&mut sections, &current_title, current_level, &body, file_path);
                body.clear();
                in_heading = true;
                heading_buf.clear();
                heading_level = level as u32;
            }

            Event::End(Tag::Heading(..)) => {
                in_heading = false;
                current_title = heading_buf.trim().to_string();
                current_level = heading_level;
            }

            // Plain and inline-code text both count as content
            Event::Text(text) | Event::Code(text) => {
                if in_heading {
                    heading_buf.push_str(&text);
                } else {
                    body.push_str(&text);
                }
            }

            // Line breaks inside a paragraph
            Event::SoftBreak | Event::HardBreak => {
                if !in_heading {
                    body.push('\n');
                }
            }

            // Block boundaries keep separate paragraphs/items readable
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_))
            | Event::End(Tag::BlockQuote) => {
                body.push('\n');
            }

            // Everything else (emphasis markers, links, images, ...) only
            // affects formatting, not the text we index
            _ => {}
        }
    }

    // Don't forget whatever was accumulated after the last heading
    flush_section(&mut sections, &current_title, current_level, &body, file_path);

    sections
}

// Pushes the accumulated section, skipping empty preamble
//
// A heading with no body still becomes a section (the title alone can be
// worth indexing); preamble with neither title nor text is dropped.
fn flush_section(
    sections: &mut Vec<Section>,
    title: &str,
    level: u32,
    body: &str,
    file_path: &str,
) {
    let content = body.trim();

    if title.is_empty() && content.is_empty() {
        return;
    }

    let title = if title.is_empty() {
        // Preamble: title the section after the file itself
        file_name(file_path)
    } else {
        title.to_string()
    };

    sections.push(Section {
        file_path: file_path.to_string(),
        title,
        level,
        content: content.to_string(),
        summary: None,
    });
}

// Returns the final component of a slash-separated path
fn file_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_heading_with_body() {
        let sections = parse_markdown_to_sections("# Title\n\nSome body text.", "README.md");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Title");
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].content, "Some body text.");
        assert_eq!(sections[0].file_path, "README.md");
        assert!(sections[0].summary.is_none());
    }

    #[test]
    fn test_multiple_headings_split_into_sections() {
        let markdown = "# One\n\nfirst\n\n## Two\n\nsecond\n\n# Three\n\nthird";
        let sections = parse_markdown_to_sections(markdown, "docs/guide.md");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "One");
        assert_eq!(sections[1].title, "Two");
        assert_eq!(sections[1].level, 2);
        assert_eq!(sections[2].title, "Three");
        assert_eq!(sections[2].content, "third");
    }

    #[test]
    fn test_preamble_before_first_heading() {
        let markdown = "Intro paragraph.\n\n# First Real Heading\n\nbody";
        let sections = parse_markdown_to_sections(markdown, "docs/guide.md");
        assert_eq!(sections.len(), 2);
        // Preamble is titled after the file, at pseudo-level 0
        assert_eq!(sections[0].title, "guide.md");
        assert_eq!(sections[0].level, 0);
        assert_eq!(sections[0].content, "Intro paragraph.");
    }

    #[test]
    fn test_heading_with_inline_code() {
        let sections = parse_markdown_to_sections("# Using `cargo build`", "README.md");
        assert_eq!(sections[0].title, "Using cargo build");
    }

    #[test]
    fn test_heading_without_body_is_kept() {
        let sections = parse_markdown_to_sections("# Lonely Heading", "README.md");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_markdown_to_sections("", "README.md").is_empty());
    }

    #[test]
    fn test_malformed_markdown_does_not_panic() {
        // Unbalanced emphasis, stray brackets, half a link - all fine
        let markdown = "### \n**bold [link](  \n`unclosed\n#nonheading";
        let _ = parse_markdown_to_sections(markdown, "weird.md");
    }

    #[test]
    fn test_list_items_land_in_content() {
        let markdown = "# Features\n\n- fast\n- small\n- safe";
        let sections = parse_markdown_to_sections(markdown, "README.md");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.contains("fast"));
        assert!(sections[0].content.contains("safe"));
    }
}
