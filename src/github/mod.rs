// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - repo_ref: Parses user input ("owner/repo" or a full URL) into an identity
// - client: Read-only wrapper around the GitHub contents API
//
// This file (mod.rs) is the module root - it re-exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod client;
mod repo_ref;

// Re-export public items from submodules
// This lets users write `github::GitHubClient` instead of
// `github::client::GitHubClient`
pub use client::{EntryKind, GitHubClient, RemoteEntry};
pub use repo_ref::{parse_repo_ref, RepoRef};
