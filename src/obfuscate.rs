//! Reversible obfuscation for image payloads stored as documents.
//!
//! This is NOT encryption. It only keeps raw base64 image data from being
//! casually readable in the data files; anyone with read access can undo it.

const SECRET_SALT: &str = "AL_FURQAN_SECURE_KEY_2025";
const MARKER: &str = "SECURE_ENC_";

/// Salt-prefix the payload, base64 it, and tag it with the marker.
/// Empty input stays empty.
pub fn encode(plain: &str) -> String {
    if plain.is_empty() {
        return String::new();
    }
    let salted = format!("{SECRET_SALT}{plain}");
    format!("{MARKER}{}", base64::encode(salted))
}

/// Undo [`encode`]. Unmarked input is returned unchanged; a marked token
/// that fails to decode cleanly (bad base64, bad utf-8, missing salt)
/// decodes to the empty string rather than an error.
pub fn decode(token: &str) -> String {
    let Some(raw) = token.strip_prefix(MARKER) else {
        return token.to_string();
    };
    let decoded = match base64::decode(raw) {
        Ok(bytes) => bytes,
        Err(_) => return String::new(),
    };
    let decoded = match String::from_utf8(decoded) {
        Ok(text) => text,
        Err(_) => return String::new(),
    };
    match decoded.strip_prefix(SECRET_SALT) {
        Some(plain) => plain.to_string(),
        None => String::new(),
    }
}

pub fn is_obfuscated(value: &str) -> bool {
    value.starts_with(MARKER)
}
