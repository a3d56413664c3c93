//! Parsing of untrusted language-model replies into draft candidates.
//!
//! The reply is sanitized, the first JSON object is located (inside a code
//! fence or by brace matching) and mapped onto the typed payload for its
//! intent. The result is only a candidate: it goes through the same
//! requirement validator as the rule-based path.

use serde::Deserialize;
use serde_json::Value;

use super::classifier::Classification;
use super::draft::DraftData;
use super::errors::ModelOutputError;
use super::intent::Intent;

/// Maximum accepted reply length (100KB).
pub const MAX_RESPONSE_LENGTH: usize = 100_000;

/// Maximum length kept for any string value in the payload.
pub const MAX_FIELD_LENGTH: usize = 500;

const INJECTION_MARKERS: &[&str] = &[
    "```system",
    "```assistant",
    "[INST]",
    "[/INST]",
    "<|system|>",
    "<|assistant|>",
    "<|user|>",
    "<|im_start|>",
    "<|im_end|>",
    "<<SYS>>",
    "<</SYS>>",
];

#[derive(Debug, Deserialize)]
struct RawModelDraft {
    intent: String,
    #[serde(default)]
    confidence: Option<f32>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
}

/// A typed candidate extracted from a model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCandidate {
    pub intent: Intent,
    pub confidence: Option<f32>,
    pub data: DraftData,
    pub message: Option<String>,
}

impl ModelCandidate {
    pub fn into_classification(self, fallback_chat: &str) -> Classification {
        match self.intent {
            Intent::GeneralChat => Classification::Chat {
                message: self
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| fallback_chat.to_string()),
            },
            intent => Classification::Candidate {
                intent,
                data: self.data,
            },
        }
    }
}

/// Parses a raw model reply.
///
/// # Errors
///
/// Returns `ModelOutputError` when the reply is oversized, holds no JSON
/// object, names an unknown intent, or carries a payload of the wrong shape.
pub fn parse_model_output(response: &str) -> Result<ModelCandidate, ModelOutputError> {
    let sanitized = sanitize(response)?;
    let json = locate_json(&sanitized).ok_or(ModelOutputError::NoJson)?;

    let raw: RawModelDraft =
        serde_json::from_str(json).map_err(|e| ModelOutputError::ParseError(e.to_string()))?;

    let intent: Intent = raw
        .intent
        .parse()
        .map_err(|_| ModelOutputError::UnknownIntent(raw.intent.clone()))?;

    let payload = match clean_strings(raw.data) {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    let data = DraftData::from_value(intent, payload).map_err(|e| {
        ModelOutputError::PayloadMismatch {
            intent,
            reason: e.to_string(),
        }
    })?;

    Ok(ModelCandidate {
        intent,
        confidence: raw.confidence.filter(|c| c.is_finite()).map(|c| c.clamp(0.0, 1.0)),
        data,
        message: raw.message.map(|m| clean_string(&m)),
    })
}

fn sanitize(response: &str) -> Result<String, ModelOutputError> {
    if response.len() > MAX_RESPONSE_LENGTH {
        return Err(ModelOutputError::TooLong {
            max: MAX_RESPONSE_LENGTH,
            actual: response.len(),
        });
    }

    let mut cleaned: String = response
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect();
    for marker in INJECTION_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    Ok(cleaned)
}

/// First JSON object in the reply, preferring a fenced code block.
fn locate_json(response: &str) -> Option<&str> {
    let trimmed = response.trim();
    if let Some(fenced) = from_code_block(trimmed) {
        return Some(fenced);
    }
    let start = trimmed.find('{')?;
    balanced_object(trimmed, start)
}

fn from_code_block(s: &str) -> Option<&str> {
    for fence in ["```json\n", "```json\r\n", "```\n", "```\r\n"] {
        if let Some(start) = s.find(fence) {
            let body_start = start + fence.len();
            if let Some(end) = s[body_start..].find("```") {
                let body = s[body_start..body_start + end].trim();
                if body.starts_with('{') {
                    return Some(body);
                }
            }
        }
    }
    None
}

fn balanced_object(s: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&s[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn clean_strings(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_string(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_strings).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, clean_strings(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Strips markup and caps the length of a single string value.
fn clean_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().chars().take(MAX_FIELD_LENGTH).collect()
}
