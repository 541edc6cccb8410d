//! Response adapters: each one knows a single provider response shape and pulls
//! the generated text out of it. They are tried in a fixed order.

use serde_json::Value;
use tracing::debug;

pub trait ResponseAdapter: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract_text(&self, raw: &Value) -> Option<String>;
}

/// `candidates[0].content.parts[*].text`, concatenated (Gemini REST).
pub struct CandidatePartsAdapter;

impl ResponseAdapter for CandidatePartsAdapter {
    fn name(&self) -> &'static str {
        "candidate_parts"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        let parts = raw.pointer("/candidates/0/content/parts")?.as_array()?;
        let texts: Vec<&str> = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// `response.text` (SDK wrapper shape).
pub struct ResponseTextAdapter;

impl ResponseAdapter for ResponseTextAdapter {
    fn name(&self) -> &'static str {
        "response_text"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        raw.pointer("/response/text")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Top-level `outputText`.
pub struct OutputTextAdapter;

impl ResponseAdapter for OutputTextAdapter {
    fn name(&self) -> &'static str {
        "output_text"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        raw.get("outputText")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// `candidates[0].content` as a plain string (legacy generate API).
pub struct CandidateContentAdapter;

impl ResponseAdapter for CandidateContentAdapter {
    fn name(&self) -> &'static str {
        "candidate_content"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        raw.pointer("/candidates/0/content")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// First `content[]` block with `type == "text"` (messages-style APIs).
pub struct MessageContentAdapter;

impl ResponseAdapter for MessageContentAdapter {
    fn name(&self) -> &'static str {
        "message_content"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        raw.get("content")?
            .as_array()?
            .iter()
            .find(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            .and_then(|b| b.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// The body itself is a JSON string.
pub struct PlainStringAdapter;

impl ResponseAdapter for PlainStringAdapter {
    fn name(&self) -> &'static str {
        "plain_string"
    }

    fn extract_text(&self, raw: &Value) -> Option<String> {
        raw.as_str().map(str::to_string)
    }
}

/// Adapters in priority order.
pub const ADAPTERS: &[&dyn ResponseAdapter] = &[
    &CandidatePartsAdapter,
    &ResponseTextAdapter,
    &OutputTextAdapter,
    &CandidateContentAdapter,
    &MessageContentAdapter,
    &PlainStringAdapter,
];

/// First non-blank text any adapter can find.
pub fn extract_text(raw: &Value) -> Option<String> {
    ADAPTERS.iter().find_map(|adapter| {
        let text = adapter
            .extract_text(raw)
            .filter(|t| !t.trim().is_empty())?;
        debug!("Extracted generated text via {} adapter", adapter.name());
        Some(text)
    })
}
