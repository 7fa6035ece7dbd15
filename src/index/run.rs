// src/index/run.rs
// =============================================================================
// This module orchestrates one indexing run.
//
// Flow (data moves forward only, no stage is re-entered):
//   resolve reference -> discover files -> fetch + parse -> summarize -> save
//
// Failure policy:
// - A bad reference or a transport error during discovery aborts the run
//   with an error (rate limiting and auth problems belong to the caller)
// - "No documentation found" and "no sections extracted" are not errors:
//   they come back as a structured report with success = false
// - Per-file problems and summarizer outages never surface at all; the
//   pipeline and the summarization stage degrade on their own
//
// Rust concepts:
// - Structs with Option fields: Optional configuration
// - Early return: Structured failure reports short-circuit the flow
// =============================================================================

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::discover::discover_doc_files;
use crate::github::{parse_repo_ref, GitHubClient, RepoRef};
use crate::index::pipeline::ingest_files;
use crate::storage::{DocIndex, IndexStore};
use crate::summarize::summarize_sections;

// Configuration for one indexing run
//
// Environment fallbacks (GITHUB_TOKEN, OPENAI_API_KEY) are resolved in
// main.rs; core logic only ever sees explicit values.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Attempt AI summaries before falling back to the simple strategy
    pub use_ai_summaries: bool,
    /// GitHub access token for private repos and higher rate limits
    pub github_token: Option<String>,
    /// API key for the AI summarizer
    pub ai_api_key: Option<String>,
    /// Index store root; None means ~/.doc-index
    pub storage_path: Option<PathBuf>,
}

// The caller-visible result of an indexing run
//
// Success and failure share one shape so --json output is uniform;
// fields that don't apply are skipped during serialization.
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    pub success: bool,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

impl IndexReport {
    // A run that produced no index, with a human-readable reason
    fn failure(repo_ref: &RepoRef, error: &str) -> Self {
        Self {
            success: false,
            repo: repo_ref.full_name(),
            error: Some(error.to_string()),
            indexed_at: None,
            file_count: None,
            section_count: None,
            files: None,
        }
    }

    // A run that saved a snapshot
    fn success(repo_ref: &RepoRef, index: &DocIndex) -> Self {
        Self {
            success: true,
            repo: repo_ref.full_name(),
            error: None,
            indexed_at: Some(index.indexed_at),
            file_count: Some(index.files.len()),
            section_count: Some(index.sections.len()),
            files: Some(index.files.clone()),
        }
    }
}

// Indexes one repository's documentation
//
// Parameters:
//   reference: repository URL or "owner/repo" string
//   options: run configuration (see IndexOptions)
//
// Returns: a structured report. Err is reserved for a bad reference or
// an unrecovered transport error during discovery.
pub async fn index_repo(reference: &str, options: IndexOptions) -> Result<IndexReport> {
    let repo_ref = parse_repo_ref(reference)?;
    let client = GitHubClient::new(options.github_token.clone())?;

    eprintln!("🔍 Discovering documentation in {}", repo_ref.full_name());

    let doc_files = discover_doc_files(&client, &repo_ref).await?;

    if doc_files.is_empty() {
        return Ok(IndexReport::failure(
            &repo_ref,
            "no documentation files found",
        ));
    }

    eprintln!("📄 Found {} documentation file(s)", doc_files.len());

    // Fetch + parse, tolerating individual file failures
    let fetch_client = client.clone();
    let fetch_ref = repo_ref.clone();
    let (raw_files, sections) = ingest_files(&doc_files, move |path| {
        let client = fetch_client.clone();
        let repo_ref = fetch_ref.clone();
        async move {
            client
                .fetch_file_text(&repo_ref.owner, &repo_ref.repo, &path)
                .await
        }
    })
    .await;

    if sections.is_empty() {
        return Ok(IndexReport::failure(&repo_ref, "no sections extracted"));
    }

    eprintln!("✂️  Extracted {} section(s)", sections.len());

    let sections = summarize_sections(
        sections,
        options.use_ai_summaries,
        options.ai_api_key.as_deref(),
    )
    .await;

    let store = IndexStore::new(options.storage_path.clone())?;
    let index = store.save_index(
        &repo_ref.owner,
        &repo_ref.repo,
        doc_files,
        sections,
        raw_files,
    )?;

    eprintln!("💾 Saved index for {}", repo_ref.full_name());

    Ok(IndexReport::success(&repo_ref, &index))
}
