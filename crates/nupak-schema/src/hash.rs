use base64::prelude::{Engine as _, BASE64_STANDARD};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid base64 digest: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Transcode a registry-published base64 SHA-512 digest into the lowercase
/// hex form the sources manifest carries.
///
/// Sidecar files may end with a trailing newline; whitespace around the
/// digest is not part of it.
pub fn decode_content_hash(encoded: &str) -> Result<String, HashError> {
    let bytes = BASE64_STANDARD.decode(encoded.trim())?;
    Ok(hex::encode(bytes))
}
