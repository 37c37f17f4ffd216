// ABOUTME: Base64 transport decoding for audio payloads
// ABOUTME: Strict standard-alphabet decode of the speech endpoint's inline data

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Error;

/// Decode a standard-alphabet base64 payload into raw bytes.
///
/// The speech endpoint returns its PCM emission base64-encoded inside a JSON
/// response. Decoding is strict: any character outside the standard alphabet
/// (URL-safe variants included) is rejected with [`Error::Decode`] rather than
/// skipped, so a corrupted payload fails here instead of playing as noise.
/// Padding characters are accepted.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, Error> {
    STANDARD
        .decode(input.as_bytes())
        .map_err(|e| Error::Decode(format!("base64 payload: {}", e)))
}

/// Encode raw bytes as standard-alphabet base64.
///
/// Used for inline request data (photo uploads) and by tests to round-trip
/// payloads.
pub fn encode_base64(input: &[u8]) -> String {
    STANDARD.encode(input)
}
