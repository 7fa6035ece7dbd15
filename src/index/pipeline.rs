// src/index/pipeline.rs
// =============================================================================
// This module fetches and parses the discovered files.
//
// Partial-failure policy:
// - Each file is processed independently: fetch, then parse into sections
// - A file that fails at either step is skipped with a warning; it simply
//   never appears in the raw-file map or the section list
// - One bad file never aborts the batch
//
// Concurrency:
// - Fetches run concurrently with a small fixed cap, the same pattern the
//   link checker used for checking URLs
// - Section order follows completion order, not discovery order; nothing
//   downstream depends on it
//
// Rust concepts:
// - Generic async functions: The fetch operation is injected, so the
//   skip-on-failure behavior is testable without a network
// - Streams: buffer_unordered() runs a bounded number of futures at once
// =============================================================================

use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::future::Future;

use crate::parser::{parse_markdown_to_sections, Section};

// How many file fetches run at once
//
// Why 8? The GitHub API rate limit is 60 requests/hour without a token;
// a modest cap keeps bursts short while still overlapping network latency.
const MAX_CONCURRENT_FETCHES: usize = 8;

// Fetches and parses every discovered file
//
// Parameters:
//   paths: discovered documentation paths
//   fetch: async operation returning the raw text for one path
//
// Returns: (raw file map, all extracted sections). Failed paths are absent
// from both - never present as empty or partial entries.
pub async fn ingest_files<F, Fut>(
    paths: &[String],
    fetch: F,
) -> (HashMap<String, String>, Vec<Section>)
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let tasks = paths.iter().cloned().map(|path| {
        let fut = fetch(path.clone());
        async move {
            match fut.await {
                Ok(content) => {
                    let sections = parse_markdown_to_sections(&content, &path);
                    Some((path, content, sections))
                }
                Err(e) => {
                    // Skip this file, keep going with the rest
                    eprintln!("  Warning: skipping {}: {}", path, e);
                    None
                }
            }
        }
    });

    let outcomes: Vec<_> = stream::iter(tasks)
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    let mut raw_files = HashMap::new();
    let mut all_sections = Vec::new();

    // flatten() drops the None entries (the skipped files)
    for (path, content, sections) in outcomes.into_iter().flatten() {
        raw_files.insert(path, content);
        all_sections.extend(sections);
    }

    (raw_files, all_sections)
}
