// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Resolve environment fallbacks (GITHUB_TOKEN, OPENAI_API_KEY) - the
//    environment is read ONLY here, never inside core logic, so the core
//    stays testable without environment mutation
// 3. Run the indexing pipeline
// 4. Print the report and exit with a proper code
//    (0 = indexed, 1 = nothing to index, 2 = error)
//
// Output streams: the report goes to stdout; progress and warnings go to
// stderr. That keeps `doc-indexer index ... --json | jq` working.
//
// Rust concepts used:
// - async/await: Because indexing is a series of network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod discover; // src/discover/ - documentation file discovery
mod github; // src/github/ - GitHub API access
mod index; // src/index/ - the indexing pipeline
mod parser; // src/parser/ - markdown section extraction
mod storage; // src/storage/ - persistent index store
mod summarize; // src/summarize/ - section summarization

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use index::{index_repo, IndexOptions, IndexReport};
use std::path::PathBuf;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected error (bad reference, rate limiting, network
            // outage during discovery) - print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = index saved
//   Ok(1) = structured failure (no docs / no sections)
//   Err   = fatal error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            reference,
            no_ai_summaries,
            token,
            storage_path,
            json,
        } => {
            // Environment fallbacks live at this boundary only
            let options = IndexOptions {
                use_ai_summaries: !no_ai_summaries,
                github_token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
                ai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                storage_path: storage_path.map(PathBuf::from),
            };

            let report = index_repo(&reference, options).await?;

            print_report(&report, json)?;

            Ok(if report.success { 0 } else { 1 })
        }
    }
}

// Prints the report either as a human-readable summary or JSON
fn print_report(report: &IndexReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
        return Ok(());
    }

    println!();

    if report.success {
        println!("✅ Indexed {}", report.repo);
        println!("📊 Summary:");
        println!("   📄 Files: {}", report.file_count.unwrap_or(0));
        println!("   📋 Sections: {}", report.section_count.unwrap_or(0));
        if let Some(indexed_at) = report.indexed_at {
            println!("   🕒 Indexed at: {}", indexed_at);
        }
        for file in report.files.iter().flatten() {
            println!("      - {}", file);
        }
    } else {
        println!(
            "⚠️  Could not index {}: {}",
            report.repo,
            report.error.as_deref().unwrap_or("unknown reason")
        );
    }

    Ok(())
}
