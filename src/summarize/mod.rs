// src/summarize/mod.rs
// =============================================================================
// This module attaches a summary to every section.
//
// Two strategies:
// - simple: deterministic, offline, can never fail
// - batch: one AI request for the whole batch, can fail in many ways
//
// Fallback discipline: try the AI strategy first (when enabled), and on ANY
// failure redo the whole batch with the simple strategy. A run never mixes
// AI summaries and simple summaries, and never fails because of the
// summarizer.
//
// Rust concepts:
// - Closures + generics: The fallback wiring takes the AI attempt as a
//   parameter, so tests can hand it a closure that always fails
// - Option: The API key may or may not be configured
// =============================================================================

mod batch;
mod simple;

pub use batch::BatchSummarizer;
pub use simple::summarize_sections_simple;

use crate::parser::Section;
use std::future::Future;

// Summarizes a batch of sections, honoring the use_ai flag
//
// Parameters:
//   sections: sections fresh from the parser (summary = None)
//   use_ai: whether the AI strategy should be attempted at all
//   api_key: key for the AI backend; None counts as an AI failure
//
// Returns: the same sections, every one with a summary populated.
pub async fn summarize_sections(
    sections: Vec<Section>,
    use_ai: bool,
    api_key: Option<&str>,
) -> Vec<Section> {
    if !use_ai {
        return summarize_sections_simple(sections);
    }

    // No key configured = the AI strategy cannot run; same fallback path
    // as any other AI failure
    let Some(key) = api_key else {
        return summarize_sections_simple(sections);
    };

    let summarizer = match BatchSummarizer::new(key) {
        Ok(s) => s,
        Err(_) => return summarize_sections_simple(sections),
    };

    with_fallback(sections, |batch| async move {
        summarizer.summarize_batch(batch).await
    })
    .await
}

// Runs one AI attempt over the whole batch, falling back to the simple
// strategy on any error or on a malformed result
//
// The attempt is a parameter so the fallback behavior is testable without
// a network or an API key.
pub async fn with_fallback<F, Fut>(sections: Vec<Section>, attempt: F) -> Vec<Section>
where
    F: FnOnce(Vec<Section>) -> Fut,
    Fut: Future<Output = anyhow::Result<Vec<Section>>>,
{
    let expected = sections.len();

    match attempt(sections.clone()).await {
        // Accept the AI result only if it is complete: one summary per
        // section, none missing
        Ok(summarized)
            if summarized.len() == expected
                && summarized.iter().all(|s| s.summary.is_some()) =>
        {
            summarized
        }
        _ => summarize_sections_simple(sections),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn section(title: &str, content: &str) -> Section {
        Section {
            file_path: "README.md".to_string(),
            title: title.to_string(),
            level: 1,
            content: content.to_string(),
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_failing_ai_falls_back_to_simple() {
        let sections = vec![
            section("Install", "Run cargo install."),
            section("Usage", "Pass a repository reference."),
        ];

        let result = with_fallback(sections, |_batch| async move {
            anyhow::Result::<Vec<Section>>::Err(anyhow!("quota exceeded"))
        })
        .await;

        // Same count, and every section got a non-empty simple summary
        assert_eq!(result.len(), 2);
        for s in &result {
            let summary = s.summary.as_deref().unwrap();
            assert!(!summary.is_empty());
        }
    }

    #[tokio::test]
    async fn test_incomplete_ai_result_falls_back() {
        let sections = vec![section("A", "one"), section("B", "two")];

        // AI "succeeds" but drops a section - treated as a failure
        let result = with_fallback(sections, |mut batch: Vec<Section>| async move {
            batch.pop();
            for s in &mut batch {
                s.summary = Some("ai".to_string());
            }
            Ok(batch)
        })
        .await;

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.summary.is_some()));
    }

    #[tokio::test]
    async fn test_successful_ai_result_is_kept() {
        let sections = vec![section("A", "one")];

        let result = with_fallback(sections, |mut batch: Vec<Section>| async move {
            for s in &mut batch {
                s.summary = Some("ai summary".to_string());
            }
            Ok(batch)
        })
        .await;

        assert_eq!(result[0].summary.as_deref(), Some("ai summary"));
    }

    #[tokio::test]
    async fn test_use_ai_false_skips_ai_entirely() {
        let sections = vec![section("A", "one")];
        let result = summarize_sections(sections, false, Some("key-that-should-not-be-used")).await;
        assert!(result[0].summary.is_some());
    }

    #[tokio::test]
    async fn test_missing_api_key_uses_simple() {
        let sections = vec![section("A", "one")];
        let result = summarize_sections(sections, true, None).await;
        assert!(result[0].summary.is_some());
    }
}
