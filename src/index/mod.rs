// src/index/mod.rs
// =============================================================================
// This module runs one complete indexing pass.
//
// Submodules:
// - pipeline: Fetch-and-parse stage with per-file failure tolerance
// - run: The orchestrator tying resolver, crawler, pipeline, summarizer
//   and store together, plus the caller-visible report type
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports
// =============================================================================

mod pipeline;
mod run;

pub use run::{index_repo, IndexOptions, IndexReport};
