// ABOUTME: Audio types and processing for retrocast
// ABOUTME: Contains AudioBuffer, payload decoders, and output device support

/// Audio payload decoders (base64 transport, raw PCM)
pub mod decode;
/// Audio output trait and implementations
pub mod output;
/// Core audio type definitions (AudioBuffer)
pub mod types;

pub use decode::{transport, Decoder, PcmDecoder};
pub use output::{AudioOutput, CpalOutput, OutputFormat};
pub use types::AudioBuffer;
