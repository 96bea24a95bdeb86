//! Image intake.
//!
//! Images never touch the filesystem as files: forms submit them as
//! `data:` URLs and they are stored obfuscated inside the owning document.
//! This module is the gate in front of that storage.

use crate::obfuscate;

/// Raw (decoded) ceiling. Base64 inflation on top of this still keeps the
/// owning document comfortably under the per-document size ceiling.
pub(crate) const MAX_IMAGE_BYTES: usize = 500 * 1024;

const SUPPORTED_TYPES: [&str; 6] = [
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/x-icon",
];

#[derive(Debug)]
pub enum UploadError {
    UnsupportedType,
    BadEncoding,
    TooLarge(usize),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::UnsupportedType => f.write_str("unsupported image type"),
            UploadError::BadEncoding => f.write_str("image payload is not valid base64"),
            UploadError::TooLarge(size) => {
                write!(
                    f,
                    "image is {size} bytes; the limit is {MAX_IMAGE_BYTES} bytes"
                )
            }
        }
    }
}

/// Validate a submitted image field and return the value to store.
///
/// Accepts: empty (cleared field), an already-stored token (unchanged
/// resubmission), a plain URL, or a `data:` URL. Data URLs are checked
/// against the type allowlist and size ceiling. Everything non-empty
/// comes back obfuscated.
pub(crate) fn accept_image(raw: &str) -> Result<String, UploadError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    if obfuscate::is_obfuscated(raw) {
        return Ok(raw.to_string());
    }
    if raw.starts_with("data:") {
        validate_data_url(raw)?;
    }
    Ok(obfuscate::encode(raw))
}

fn validate_data_url(url: &str) -> Result<(), UploadError> {
    let rest = &url["data:".len()..];
    let (header, payload) = rest.split_once(',').ok_or(UploadError::BadEncoding)?;
    let mime = header.strip_suffix(";base64").ok_or(UploadError::BadEncoding)?;
    if !SUPPORTED_TYPES.contains(&mime) {
        return Err(UploadError::UnsupportedType);
    }
    let decoded = base64::decode(payload).map_err(|_| UploadError::BadEncoding)?;
    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge(decoded.len()));
    }
    Ok(())
}
