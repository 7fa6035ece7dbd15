// src/summarize/simple.rs
// =============================================================================
// This module implements the deterministic fallback summarizer.
//
// Strategy: take the first non-empty line of the section's content and
// truncate it to a fixed length. Sections with no content fall back to
// their title, so the summary is never empty.
//
// No network, no configuration, no failure modes - this is the strategy
// the pipeline can always count on.
//
// Rust concepts:
// - Iterators: lines() + find() to locate the first real line
// - char boundaries: Truncating by characters, not bytes, so multi-byte
//   UTF-8 text can't be cut in half
// =============================================================================

use crate::parser::Section;

// Longest summary the simple strategy produces, in characters
const MAX_SUMMARY_CHARS: usize = 150;

// Attaches a simple summary to every section
//
// Consumes and returns the Vec so it chains naturally after parsing.
pub fn summarize_sections_simple(mut sections: Vec<Section>) -> Vec<Section> {
    for section in &mut sections {
        section.summary = Some(simple_summary(section));
    }
    sections
}

// Builds the summary for one section
fn simple_summary(section: &Section) -> String {
    // First line with actual text in it
    let first_line = section
        .content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty());

    match first_line {
        Some(line) => truncate_chars(line, MAX_SUMMARY_CHARS),
        // Heading-only section: the title is the best summary we have
        None => section.title.clone(),
    }
}

// Truncates to at most `max` characters, ellipsis included
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    // Leave room for the "..." so the result never exceeds max
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, content: &str) -> Section {
        Section {
            file_path: "README.md".to_string(),
            title: title.to_string(),
            level: 1,
            content: content.to_string(),
            summary: None,
        }
    }

    #[test]
    fn test_summary_is_first_nonempty_line() {
        let result = summarize_sections_simple(vec![section(
            "Install",
            "\n\nRun cargo install doc-indexer.\nMore detail below.",
        )]);
        assert_eq!(
            result[0].summary.as_deref(),
            Some("Run cargo install doc-indexer.")
        );
    }

    #[test]
    fn test_empty_content_falls_back_to_title() {
        let result = summarize_sections_simple(vec![section("Lonely Heading", "")]);
        assert_eq!(result[0].summary.as_deref(), Some("Lonely Heading"));
    }

    #[test]
    fn test_long_line_is_truncated() {
        let long = "x".repeat(400);
        let result = summarize_sections_simple(vec![section("T", &long)]);
        let summary = result[0].summary.as_deref().unwrap();
        assert!(summary.ends_with("..."));
        // The cap includes the ellipsis
        assert_eq!(summary.chars().count(), MAX_SUMMARY_CHARS);
    }

    #[test]
    fn test_truncated_summary_never_exceeds_cap() {
        let long = "word ".repeat(100);
        let result = summarize_sections_simple(vec![section("T", &long)]);
        let summary = result[0].summary.as_deref().unwrap();
        assert!(summary.chars().count() <= MAX_SUMMARY_CHARS);
    }

    #[test]
    fn test_line_at_exactly_the_cap_is_untouched() {
        let exact = "y".repeat(MAX_SUMMARY_CHARS);
        let result = summarize_sections_simple(vec![section("T", &exact)]);
        assert_eq!(result[0].summary.as_deref(), Some(exact.as_str()));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 200 multi-byte characters; byte-indexed truncation would panic
        let text = "é".repeat(200);
        let result = summarize_sections_simple(vec![section("T", &text)]);
        assert!(result[0].summary.as_deref().unwrap().ends_with("..."));
    }

    #[test]
    fn test_every_section_gets_a_summary() {
        let sections = vec![
            section("A", "content a"),
            section("B", ""),
            section("C", "content c"),
        ];
        let result = summarize_sections_simple(sections);
        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|s| !s.summary.as_deref().unwrap_or("").is_empty()));
    }
}
