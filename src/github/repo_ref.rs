// src/github/repo_ref.rs
// =============================================================================
// This module parses user-supplied repository references.
//
// Accepted formats (tried in order, first match wins):
//   1. A URL: https://github.com/owner/repo (extra segments like /tree/main
//      are tolerated - we only take the first two path segments)
//   2. A host path without scheme: github.com/owner/repo
//   3. A bare "owner/repo" string with no other slashes
//
// Normalization:
// - Trailing slashes are stripped before matching
// - A trailing ".git" suffix is stripped from the repo name
//
// A reference that matches none of the formats is a fatal error - there is
// nothing sensible to index without a repository identity.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Result: For operations that can fail
// - String slices: Parsing without extra allocations
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use url::Url;

// The identity of one hosted repository
//
// Derived once from user input, then used unchanged as the index key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    // Builds a RepoRef, stripping a trailing ".git" from the repo name
    //
    // Example: ("rust-lang", "rust.git") -> owner "rust-lang", repo "rust"
    fn new(owner: &str, repo: &str) -> Self {
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    // Returns the "owner/repo" form used in output and error messages
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

// Parses a repository reference string into a RepoRef
//
// Examples:
//   "https://github.com/rust-lang/rust" -> ("rust-lang", "rust")
//   "github.com/user/repo.git"          -> ("user", "repo")
//   "octocat/Hello-World"               -> ("octocat", "Hello-World")
//
// Returns an error (carrying the original input for diagnostics) when the
// string matches none of the accepted formats.
pub fn parse_repo_ref(input: &str) -> Result<RepoRef> {
    // Strip surrounding whitespace and any trailing slashes up front so
    // "https://github.com/a/b/" and "a/b/" behave like their clean forms
    let trimmed = input.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(anyhow!("Could not parse repository reference: '{}'", input));
    }

    // Format 1: a real URL with a scheme
    // The url crate handles scheme, host, and percent-encoding for us;
    // owner and repo are the first two path segments after the host
    if trimmed.contains("://") {
        let parsed = Url::parse(trimmed)
            .map_err(|e| anyhow!("Could not parse repository reference '{}': {}", input, e))?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segs| segs.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if segments.len() >= 2 {
            return Ok(RepoRef::new(segments[0], segments[1]));
        }

        return Err(anyhow!("Could not parse repository reference: '{}'", input));
    }

    let parts: Vec<&str> = trimmed.split('/').collect();

    // Format 2: host/owner/repo without a scheme
    // We recognize the host by the dot in its name ("github.com")
    if parts.len() >= 3 && parts[0].contains('.') {
        return Ok(RepoRef::new(parts[1], parts[2]));
    }

    // Format 3: bare "owner/repo" - exactly one slash, both sides non-empty
    // Anything with more slashes ("a/b/c") is ambiguous and rejected
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        return Ok(RepoRef::new(parts[0], parts[1]));
    }

    Err(anyhow!("Could not parse repository reference: '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let r = parse_repo_ref("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "rust");
    }

    #[test]
    fn test_parse_url_with_git_suffix() {
        let r = parse_repo_ref("https://github.com/user/repo.git").unwrap();
        assert_eq!(r.owner, "user");
        assert_eq!(r.repo, "repo");
    }

    #[test]
    fn test_parse_url_with_trailing_slash() {
        let r = parse_repo_ref("https://github.com/user/repo/").unwrap();
        assert_eq!(r.owner, "user");
        assert_eq!(r.repo, "repo");
    }

    #[test]
    fn test_parse_url_with_extra_segments() {
        let r = parse_repo_ref("https://github.com/user/repo/tree/main").unwrap();
        assert_eq!(r.owner, "user");
        assert_eq!(r.repo, "repo");
    }

    #[test]
    fn test_parse_host_path_without_scheme() {
        let r = parse_repo_ref("github.com/octocat/Hello-World").unwrap();
        assert_eq!(r.owner, "octocat");
        assert_eq!(r.repo, "Hello-World");
    }

    #[test]
    fn test_parse_bare_owner_repo() {
        let r = parse_repo_ref("octocat/Hello-World").unwrap();
        assert_eq!(r.owner, "octocat");
        assert_eq!(r.repo, "Hello-World");
    }

    #[test]
    fn test_bare_form_matches_url_form() {
        // The same owner/repo must resolve identically in both formats
        let from_url = parse_repo_ref("https://github.com/octocat/Hello-World").unwrap();
        let from_bare = parse_repo_ref("octocat/Hello-World").unwrap();
        assert_eq!(from_url, from_bare);
    }

    #[test]
    fn test_reject_empty_string() {
        assert!(parse_repo_ref("").is_err());
    }

    #[test]
    fn test_reject_single_name() {
        assert!(parse_repo_ref("justonename").is_err());
    }

    #[test]
    fn test_reject_ambiguous_three_segments() {
        // "a/b/c" has no host-like first segment, so it is neither a URL
        // nor a clean owner/repo pair
        assert!(parse_repo_ref("a/b/c").is_err());
    }

    #[test]
    fn test_error_carries_original_input() {
        let err = parse_repo_ref("justonename").unwrap_err();
        assert!(err.to_string().contains("justonename"));
    }

    #[test]
    fn test_full_name() {
        let r = parse_repo_ref("octocat/Hello-World").unwrap();
        assert_eq!(r.full_name(), "octocat/Hello-World");
    }
}
