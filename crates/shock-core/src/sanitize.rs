//! Stripping of markdown code fences around model output.
//!
//! Models asked for bare JSON still sometimes wrap the answer in a fenced
//! block, with or without a `json` language tag. Sanitization removes that
//! wrapping and nothing else: it only touches leading/trailing whitespace
//! and fence markers at the very start and end of the text, so well-formed
//! JSON content passes through untouched and the operation is idempotent.

/// Strip a surrounding markdown code fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}
