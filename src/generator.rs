//! # Question Source
//!
//! Pulls a fresh question pool from an OpenAI-style chat-completion
//! endpoint. The completion is expected to be a JSON array of question
//! objects; providers like to wrap that in Markdown code fences, so the
//! fences are stripped before parsing. Unusable entries are dropped, and
//! an empty or non-array result fails the whole fetch so the stale pool
//! stays in place.

use anyhow::{anyhow, bail, Context, Error};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    models::{build_pool, Question, RawQuestion},
};

pub const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const PROMPT: &str = "Generate 10 multiple-choice general knowledge quiz questions. \
Respond with a raw JSON array and nothing else. Each element must be an object \
with exactly these fields: \"text\" (the question), \"choices\" (an array of 4 \
answer strings), \"correctChoiceIndex\" (0-based index of the correct choice), \
and \"explanation\" (one sentence explaining the answer). Do not wrap the JSON \
in Markdown code fences.";

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Fetches and validates a new question pool. The returned pool is
/// complete, ids assigned, ready to publish; on any failure the caller
/// keeps whatever pool it already has.
pub async fn fetch_questions(client: &Client, config: &Config) -> Result<Vec<Question>, Error> {
    let payload = json!({
        "model": config.model,
        "messages": [{ "role": "user", "content": PROMPT }],
        "temperature": 0.7,
    });

    let response = client
        .post(ENDPOINT)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?;

    let completion: ChatResponse = response.json().await?;
    let content = completion
        .choices
        .first()
        .map(|choice| choice.message.content.as_str())
        .ok_or_else(|| anyhow!("completion had no choices"))?;

    let records = parse_questions(content)?;

    Ok(build_pool(records))
}

fn parse_questions(content: &str) -> Result<Vec<RawQuestion>, Error> {
    let stripped = strip_fences(content);

    let values: Vec<serde_json::Value> =
        serde_json::from_str(&stripped).context("completion was not a JSON array")?;

    let records: Vec<RawQuestion> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawQuestion>(value).ok())
        .filter(RawQuestion::is_valid)
        .collect();

    if records.is_empty() {
        bail!("completion contained no usable questions");
    }

    Ok(records)
}

fn strip_fences(content: &str) -> String {
    let fence = Regex::new(r"^```[a-zA-Z]*\s*|\s*```$").unwrap();

    fence.replace_all(content.trim(), "").into_owned()
}
