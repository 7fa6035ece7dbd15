// src/storage/mod.rs
// =============================================================================
// This module persists the finished index to disk.
//
// Layout:
// - One JSON file per repository under the store root
// - Default root is ~/.doc-index, overridable per run
// - Saving replaces any previous snapshot for the same repository
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports
// =============================================================================

mod index_store;

// Re-export the store and the persisted snapshot type
pub use index_store::{DocIndex, IndexStore};
