// ABOUTME: Main library entry point for retrocast
// ABOUTME: Exports the audio decode pipeline, playback session, and service client

//! # retrocast
//!
//! Rust client for turning a photograph into a spoken historical narration.
//!
//! This library talks to a hosted multimodal generative-AI service (scene
//! narration, web-grounded insight, speech synthesis), decodes the raw PCM
//! audio the speech endpoint returns, and plays it through a platform audio
//! output behind an explicit playback-session state machine.

#![warn(missing_docs)]

/// Audio types, decoding, and output
pub mod audio;
/// Playback session state machine
pub mod playback;
/// Client for the hosted generative-AI service
pub mod service;

pub use audio::decode::PcmDecoder;
pub use audio::types::AudioBuffer;
pub use playback::{PlaybackSession, PlaybackState};
pub use service::client::NarrationClient;
pub use service::ServiceConfig;

/// Result type for retrocast operations
pub type Result<T> = std::result::Result<T, error::Error>;

/// Error types for retrocast
pub mod error {
    use thiserror::Error;

    /// Error types for retrocast operations
    #[derive(Error, Debug)]
    pub enum Error {
        /// Malformed base64 payload
        #[error("Decode error: {0}")]
        Decode(String),

        /// Caller-supplied argument outside the accepted range
        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        /// HTTP transport failure while reaching the service
        #[error("Transport error: {0}")]
        Transport(String),

        /// Service responded but the response was unusable
        #[error("Service error: {0}")]
        Service(String),

        /// Audio output error
        #[error("Audio output error: {0}")]
        Output(String),

        /// Playback session driven through a transition its state forbids
        #[error("Playback error: {0}")]
        Playback(String),
    }
}
