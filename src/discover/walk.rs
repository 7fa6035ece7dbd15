// src/discover/walk.rs
// =============================================================================
// This module implements the documentation crawl with an explicit work stack.
//
// How it works:
// 1. List the repository root and collect README-style files
// 2. For each well-known directory (docs, doc, documentation), push it on a
//    stack with a depth budget
// 3. Pop a directory, list it, and push one work item per interesting entry
//    in reverse listing order - so popping replays the listing front to
//    back, and a subdirectory is explored right at its position in the
//    listing before any later sibling
// 4. Repeat until the stack is empty, then move to the next well-known dir
//
// A directory that does not exist simply lists as empty (see the client
// module), so probing docs/doc/documentation needs no special-casing.
//
// Depth budget:
// - Starts at MAX_DOC_DEPTH per well-known directory and drops by one per
//   descent. A directory with budget 1 still contributes its files, but its
//   subdirectories are not entered (and not listed at all - no wasted
//   round trip on a level that could contribute nothing).
//
// Note: README detection applies to the repository root only. READMEs nested
// in subpackages outside docs/ are not collected - that asymmetry is
// intentional and kept as-is.
//
// Rust concepts:
// - HashSet: To deduplicate discovered paths (O(1) lookup)
// - Vec as a stack: push/pop from the back gives depth-first order
// - Generic async functions: The lister is injected, so tests can fake it
// =============================================================================

use anyhow::Result;
use std::collections::HashSet;
use std::future::Future;

use crate::github::{EntryKind, GitHubClient, RemoteEntry, RepoRef};

// File extensions we treat as documentation
const DOC_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

// Directories probed at the repository root, in this order
const WELL_KNOWN_DIRS: [&str; 3] = ["docs", "doc", "documentation"];

// How many directory levels to collect below each well-known directory
//
// Why 3? Documentation trees deeper than docs/a/b/ are rare, and every
// level costs one API round trip per directory against a rate-limited API.
const MAX_DOC_DEPTH: usize = 3;

// One unit of pending traversal work
//
// Splitting "emit this file" from "descend into this directory" lets the
// stack preserve the exact listing order across descents.
enum WalkItem {
    // A documentation file to record
    Emit(String),
    // A directory to list, with its remaining depth budget
    Descend(String, usize),
}

// Discovers documentation files in a repository
//
// Returns: relative paths (forward slashes), deduplicated, root READMEs
// first, then each well-known directory depth-first in listing order.
//
// An empty result is not an error here - the caller decides how to report
// a repository with no documentation.
pub async fn discover_doc_files(client: &GitHubClient, repo_ref: &RepoRef) -> Result<Vec<String>> {
    // The walk only needs "list this path"; bind the client into a closure
    // so the traversal itself stays free of HTTP details
    let client = client.clone();
    let repo_ref = repo_ref.clone();

    walk_repository(move |path| {
        let client = client.clone();
        let repo_ref = repo_ref.clone();
        async move {
            client
                .list_contents(&repo_ref.owner, &repo_ref.repo, &path)
                .await
        }
    })
    .await
}

// The actual traversal, generic over the listing operation
//
// Listing errors other than not-found abort the whole walk: they usually
// mean rate limiting or auth trouble, which skipping would only hide.
async fn walk_repository<F, Fut>(list: F) -> Result<Vec<String>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<RemoteEntry>>>,
{
    let mut discovered = Vec::new();

    // Tracks every path we already collected, so aliased or repeated
    // directories can never produce duplicates
    let mut seen: HashSet<String> = HashSet::new();

    // Step 1: READMEs at the repository root
    for entry in list(String::new()).await? {
        if entry.kind == EntryKind::File
            && is_readme(&entry.name)
            && seen.insert(entry.name.clone())
        {
            discovered.push(entry.name);
        }
    }

    // Step 2: well-known documentation directories, each with its own budget
    for dir in WELL_KNOWN_DIRS {
        let mut stack: Vec<WalkItem> = vec![WalkItem::Descend(dir.to_string(), MAX_DOC_DEPTH)];

        while let Some(item) = stack.pop() {
            match item {
                WalkItem::Emit(path) => {
                    if seen.insert(path.clone()) {
                        discovered.push(path);
                    }
                }
                WalkItem::Descend(path, remaining) => {
                    // A missing directory lists as empty, so this is a no-op
                    let entries = list(path.clone()).await?;

                    // Reverse push: the first listing entry ends up on top
                    // of the stack, so the listing is replayed in order and
                    // a subdirectory's subtree is emitted at the position
                    // the directory held in the listing
                    for entry in entries.into_iter().rev() {
                        let child = format!("{}/{}", path, entry.name);

                        match entry.kind {
                            EntryKind::File if has_doc_extension(&entry.name) => {
                                stack.push(WalkItem::Emit(child));
                            }
                            // Budget 1 means "collect files here, go no deeper"
                            EntryKind::Dir if remaining > 1 => {
                                stack.push(WalkItem::Descend(child, remaining - 1));
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    Ok(discovered)
}

// Checks whether a root-level file name is a README
//
// Case-insensitive: README.md, Readme.markdown, readme.md all match.
fn is_readme(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.starts_with("readme") && has_doc_extension(&lower)
}

// Checks whether a file name ends in a recognized documentation extension
fn has_doc_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    DOC_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack instead of recursion?
//    - Each level of recursion costs call-stack space
//    - A hostile repository could nest directories very deep
//    - An explicit Vec of work items has no such limit, and makes it easy
//      to parallelize later (pop several items at once)
//
// 2. What is while let Some(...) = stack.pop()?
//    - Loop while pattern matching succeeds
//    - Stops when the stack is empty (pop() returns None)
//
// 3. Why does the closure clone the client?
//    - Every call to list() creates a new future
//    - Each future needs its own handle to the client and identity
//    - reqwest::Client is reference-counted, so the clone is cheap
//
// 4. What does seen.insert() return?
//    - true if the value was newly inserted, false if it was already there
//    - Using it inside the if condition gives us dedup and collection in
//      one step
// -----------------------------------------------------------------------------
