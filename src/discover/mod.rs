// src/discover/mod.rs
// =============================================================================
// This module finds documentation files in a repository.
//
// Features:
// - Root-level README detection (any case, any markdown extension)
// - Probing of well-known documentation directories (docs, doc, documentation)
// - Depth-limited descent below each well-known directory
// - Deduplication of discovered paths
//
// Why a separate module?
// - Discovery is pure traversal logic; it only needs "list this directory"
//   from the outside, so it stays testable without a network
//
// Rust concepts:
// - Generics: The walk is generic over the listing operation
// - Collections: HashSet for dedup, Vec as an explicit work stack
// =============================================================================

mod walk;

// Re-export the main discovery function
pub use walk::discover_doc_files;
