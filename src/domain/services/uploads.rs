#[cfg(test)]
#[path = "uploads_test.rs"]
mod tests;

use std::path::Path;
use std::string::FromUtf8Error;

use anyhow::Result;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Datei konnte nicht als UTF-8 Text gelesen werden.")]
    Decoding(#[source] FromUtf8Error),
}

/// Decodes uploaded bytes as UTF-8 text. Anything else is rejected with the
/// original decode error preserved as the cause.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, UploadError> {
    return String::from_utf8(bytes).map_err(UploadError::Decoding);
}

pub async fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    return Ok(decode_text(bytes)?);
}
