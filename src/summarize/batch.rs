// src/summarize/batch.rs
// =============================================================================
// This module implements the AI batch summarizer.
//
// How it works:
// 1. Pack every section (title + truncated content) into one prompt
// 2. Send a single chat-completions request to an OpenAI-compatible API
// 3. Expect the reply to be a JSON array with exactly one summary per
//    section, in order
// 4. Attach the summaries
//
// Anything unexpected - HTTP failure, malformed reply, wrong count - is an
// error. The caller (summarize/mod.rs) catches every error and redoes the
// batch with the simple strategy, so nothing here needs to be defensive
// about partial results.
//
// Rust concepts:
// - serde derive on request/response structs for the JSON wire format
// - async/await: One network round trip for the whole batch
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::parser::Section;

// Chat-completions endpoint (OpenAI-compatible)
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

// Model used for summarization
const MODEL: &str = "gpt-4o-mini";

// How much of each section's content goes into the prompt
// Keeps the request bounded even for very long sections
const MAX_CONTENT_CHARS: usize = 600;

// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// The parts of the response we care about
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

// Summarizes a whole batch of sections with one API call
pub struct BatchSummarizer {
    client: Client,
    api_key: String,
}

impl BatchSummarizer {
    // Creates a summarizer with a generous timeout
    // (one request covers the whole batch, so it may take a while)
    pub fn new(api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    // Summarizes all sections in one request
    //
    // Returns the sections with summaries attached, or an error when the
    // API call or the reply parsing fails in any way.
    pub async fn summarize_batch(&self, mut sections: Vec<Section>) -> Result<Vec<Section>> {
        if sections.is_empty() {
            return Ok(sections);
        }

        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You summarize documentation sections. Reply with a JSON array \
                              of strings, one summary of at most 25 words per numbered \
                              section, in order. Reply with the JSON array only."
                        .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(&sections),
                },
            ],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Summarizer API error: HTTP {}", response.status()));
        }

        let reply: ChatResponse = response.json().await?;
        let text = &reply
            .choices
            .first()
            .ok_or_else(|| anyhow!("Summarizer returned no choices"))?
            .message
            .content;

        let summaries: Vec<String> = serde_json::from_str(extract_json_array(text)?)?;

        if summaries.len() != sections.len() {
            return Err(anyhow!(
                "Summarizer returned {} summaries for {} sections",
                summaries.len(),
                sections.len()
            ));
        }

        for (section, summary) in sections.iter_mut().zip(summaries) {
            section.summary = Some(summary);
        }

        Ok(sections)
    }
}

// Formats the sections as a numbered list for the prompt
fn build_prompt(sections: &[Section]) -> String {
    let mut prompt = String::from("Summarize each documentation section:\n\n");

    for (i, section) in sections.iter().enumerate() {
        let content: String = section.content.chars().take(MAX_CONTENT_CHARS).collect();
        prompt.push_str(&format!(
            "{}. [{}] {}\n{}\n\n",
            i + 1,
            section.file_path,
            section.title,
            content
        ));
    }

    prompt
}

// Pulls the JSON array out of the reply text
//
// Models sometimes wrap the array in prose or a code fence; taking the
// outermost brackets handles both.
fn extract_json_array(text: &str) -> Result<&str> {
    let start = text
        .find('[')
        .ok_or_else(|| anyhow!("Summarizer reply contains no JSON array"))?;
    let end = text
        .rfind(']')
        .ok_or_else(|| anyhow!("Summarizer reply contains no JSON array"))?;

    if end < start {
        return Err(anyhow!("Summarizer reply contains no JSON array"));
    }

    Ok(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, content: &str) -> Section {
        Section {
            file_path: "README.md".to_string(),
            title: title.to_string(),
            level: 1,
            content: content.to_string(),
            summary: None,
        }
    }

    #[test]
    fn test_extract_plain_array() {
        let text = r#"["one", "two"]"#;
        assert_eq!(extract_json_array(text).unwrap(), r#"["one", "two"]"#);
    }

    #[test]
    fn test_extract_fenced_array() {
        let text = "Here you go:\n```json\n[\"one\"]\n```";
        assert_eq!(extract_json_array(text).unwrap(), "[\"one\"]");
    }

    #[test]
    fn test_extract_fails_without_array() {
        assert!(extract_json_array("sorry, I cannot do that").is_err());
    }

    #[test]
    fn test_prompt_numbers_sections_and_truncates() {
        let long = "y".repeat(5000);
        let prompt = build_prompt(&[section("Intro", "short"), section("Long", &long)]);
        assert!(prompt.contains("1. [README.md] Intro"));
        assert!(prompt.contains("2. [README.md] Long"));
        // The 5000-char body must have been cut down
        assert!(prompt.len() < 2000);
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_no_op() {
        let summarizer = BatchSummarizer::new("test-key").unwrap();
        let result = summarizer.summarize_batch(Vec::new()).await.unwrap();
        assert!(result.is_empty());
    }
}
