// src/parser/mod.rs
// =============================================================================
// This module turns Markdown text into structured sections.
//
// A "section" is one heading plus the body text under it - the atomic unit
// we summarize and index. Parsing is best-effort: malformed Markdown never
// fails, it just produces whatever structure can be salvaged.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports
// =============================================================================

mod markdown;

// Re-export the section type and the parsing entry point
pub use markdown::{parse_markdown_to_sections, Section};
