//! Parsing and base64 decoding of the extracted secret data.

use crate::traits::Output;
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Flat key to base64-value mapping extracted from a secret manifest.
///
/// A BTreeMap so the rendered manifest lists keys in a stable, sorted order.
#[derive(Debug, Deserialize)]
pub struct SecretData(pub BTreeMap<String, String>);

/// Parse the extractor's JSON output into a flat string-to-string mapping.
///
/// Anything non-flat (nested objects, arrays, numbers) is a fatal parse
/// failure.
pub fn parse_data(json: &str) -> Result<SecretData> {
    serde_json::from_str(json).context("Failed to parse extracted secret data")
}

/// Decode each value in place as standard padded base64.
///
/// A value that fails to decode, or that decodes to bytes which are not valid
/// UTF-8, is reported through `output` with its key named and left untouched;
/// the remaining entries are still processed. This matches the behavior
/// operators rely on when a secret mixes plaintext and encoded values.
pub fn decode_values(data: &mut SecretData, output: &dyn Output) {
    for (key, value) in data.0.iter_mut() {
        let decoded = match STANDARD.decode(value.as_bytes()) {
            Ok(bytes) => bytes,
            Err(err) => {
                output.error(&format!("Error decoding data value for key {}: {}", key, err));
                continue;
            }
        };

        match String::from_utf8(decoded) {
            Ok(plaintext) => *value = plaintext,
            Err(err) => {
                output.error(&format!("Error decoding data value for key {}: {}", key, err));
            }
        }
    }
}
