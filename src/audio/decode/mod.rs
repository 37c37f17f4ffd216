// ABOUTME: Audio payload decoder implementations
// ABOUTME: Base64 transport decoding and raw PCM sample decoding

/// Raw PCM decoder implementation
pub mod pcm;
/// Base64 transport decoding for service audio payloads
pub mod transport;

pub use pcm::PcmDecoder;

use crate::audio::types::AudioBuffer;
use crate::error::Error;

/// Decoder trait for audio codecs
pub trait Decoder {
    /// Decode raw audio data into a buffer
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, Error>;
}
