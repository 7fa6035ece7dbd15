// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "doc-indexer",
    version = "0.1.0",
    about = "A CLI tool to index a GitHub repository's documentation",
    long_about = "doc-indexer crawls a GitHub repository for README files and docs/ content, \
                  splits the Markdown into sections, summarizes them, and saves a searchable \
                  index under ~/.doc-index."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a repository's documentation
    ///
    /// Example: doc-indexer index https://github.com/rust-lang/rust
    Index {
        /// Repository URL or "owner/repo" string
        ///
        /// This is a positional argument (required, no flag needed)
        reference: String,

        /// Skip AI summaries and use the deterministic summarizer
        ///
        /// By default the AI summarizer is attempted first (it quietly
        /// falls back to the simple one when unavailable)
        #[arg(long)]
        no_ai_summaries: bool,

        /// GitHub access token for private repos / higher rate limits
        ///
        /// Falls back to the GITHUB_TOKEN environment variable
        #[arg(long)]
        token: Option<String>,

        /// Directory for the index store (default: ~/.doc-index)
        #[arg(long)]
        storage_path: Option<String>,

        /// Output the run report in JSON format instead of a summary
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (the available subcommands)
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why a negative flag (--no-ai-summaries)?
//    - clap boolean flags default to false when absent
//    - The behavior we want on by default (AI summaries) is therefore
//      expressed as a flag that switches it off
//
// 4. Why Option<String> for --token?
//    - The flag is optional; None means "not given on the command line"
//    - main.rs then tries the environment before giving up
// -----------------------------------------------------------------------------
