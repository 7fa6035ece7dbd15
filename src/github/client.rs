// src/github/client.rs
// =============================================================================
// This module fetches repository contents from the GitHub API.
//
// Two read-only operations:
// - list_contents: directory listing (JSON representation)
// - fetch_file_text: raw file content (raw representation)
//
// The two treat failure differently on purpose:
// - A 404 on a directory listing means "nothing there" and returns an empty
//   list. The crawler probes optional directories like docs/ and doc/, so
//   their absence is normal, not an error.
// - Any failure on a file fetch IS an error. A file we fetch was already
//   discovered through a listing, so a miss there is an anomaly the caller
//   should get to see.
//
// Every other non-success status (403 rate limit, 401 bad token, 5xx) is
// propagated as an error on both operations.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - serde Deserialize: Mapping the API's JSON onto our own types
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;

// Base URL of the GitHub REST API
const API_ROOT: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent, so we always send one
const USER_AGENT: &str = "doc-indexer";

// Accept headers selecting the response representation
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

// One entry of a directory listing as the API returns it
//
// We only keep the fields we use; serde ignores the rest of the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    // "type" is a Rust keyword, so the field is renamed on our side
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

// What kind of entry a listing row is
//
// GitHub also reports "symlink" and "submodule"; those land in Other and
// are ignored by the crawler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

// A reusable client for one indexing run
//
// Holds the HTTP connection pool and the optional access token. Clone is
// cheap: reqwest::Client is internally reference-counted.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    // Creates a client with a per-request timeout
    //
    // The token is optional: public repositories work without one, but a
    // token raises the API rate limit and unlocks private repositories.
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30)) // Per-request cap, surfaced as a transport error
            .build()?;

        Ok(Self { client, token })
    }

    // Builds a GET request with the common headers attached
    fn request(&self, url: &str, accept: &str) -> RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", accept);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        request
    }

    // Lists the contents of a directory in the repository
    //
    // Parameters:
    //   owner/repo: repository identity
    //   path: directory path relative to the repo root ("" = root)
    //
    // Returns: the entries of the directory, or an empty Vec when the path
    // does not exist (404). Other non-success statuses are errors.
    pub async fn list_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<RemoteEntry>> {
        let url = format!("{}/repos/{}/{}/contents/{}", API_ROOT, owner, repo, path);

        let response = self.request(&url, ACCEPT_JSON).send().await?;

        // Missing directory = nothing to list, not a failure
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to list {}/{}/{}: HTTP {}",
                owner,
                repo,
                path,
                response.status()
            ));
        }

        let entries = response.json::<Vec<RemoteEntry>>().await?;
        Ok(entries)
    }

    // Fetches the raw text content of one file
    //
    // Unlike list_contents, a 404 here is an error: the file was discovered
    // through a listing moments ago, so it should exist.
    pub async fn fetch_file_text(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let url = format!("{}/repos/{}/{}/contents/{}", API_ROOT, owner, repo, path);

        let response = self.request(&url, ACCEPT_RAW).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch {}/{}/{}: HTTP {}",
                owner,
                repo,
                path,
                response.status()
            ));
        }

        let content = response.text().await?;
        Ok(content)
    }
}
