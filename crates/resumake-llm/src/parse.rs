//! Best-effort reply parser: `<think>` reasoning block + fenced JSON payload.

use crate::types::ParsedReply;
use serde_json::Value;
use tracing::warn;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";
const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// How the closing ``` fence is located.
///
/// The reference behavior takes the last ``` anywhere in the text, which is
/// only correct when exactly one fenced block follows the opener. Callers
/// that expect trailing prose or multiple blocks should pick
/// [`FirstAfterOpener`](FenceStrategy::FirstAfterOpener).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceStrategy {
    /// Last ``` in the whole text (reference behavior).
    #[default]
    LastInText,
    /// First ``` after the opener.
    FirstAfterOpener,
}

/// Parse raw completion text with the default [`FenceStrategy`].
pub fn parse_reply(raw: &str) -> ParsedReply {
    parse_reply_with(raw, FenceStrategy::default())
}

/// Parse raw completion text into a [`ParsedReply`].
///
/// The two extraction passes are independent and the function is total:
/// absence or malformation of either block yields `None` for that field,
/// never an error. Worst case both fields are null.
pub fn parse_reply_with(raw: &str, strategy: FenceStrategy) -> ParsedReply {
    ParsedReply {
        think: think_block(raw).map(str::to_owned),
        data: fenced_json(raw, strategy),
    }
}

/// Span strictly between the first `<think>` and the first `</think>`,
/// trimmed. Missing or reordered tags count as not found.
fn think_block(raw: &str) -> Option<&str> {
    let start = raw.find(THINK_OPEN)? + THINK_OPEN.len();
    let close = raw.find(THINK_CLOSE)?;
    if close < start {
        return None;
    }
    Some(raw[start..close].trim())
}

/// JSON object between the first ```json opener and the closer chosen by
/// `strategy`. Invalid span, invalid JSON, or a non-object document all
/// count as not found.
fn fenced_json(raw: &str, strategy: FenceStrategy) -> Option<serde_json::Map<String, Value>> {
    let start = raw.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let close = match strategy {
        FenceStrategy::LastInText => raw.rfind(FENCE_CLOSE)?,
        FenceStrategy::FirstAfterOpener => start + raw[start..].find(FENCE_CLOSE)?,
    };
    if close <= start {
        return None;
    }
    let body = raw[start..close].trim();
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            warn!("fenced block holds valid JSON but not an object; dropping");
            None
        }
        Err(err) => {
            // Models frequently emit near-JSON; degrade instead of failing.
            warn!(%err, "invalid JSON in fenced block");
            None
        }
    }
}
