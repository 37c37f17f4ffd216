// ABOUTME: Client for the hosted multimodal generative-AI service
// ABOUTME: Wire message types, configuration, and the HTTP client

/// HTTP client implementation
pub mod client;
/// Wire message type definitions and serialization
pub mod messages;

pub use client::{Insight, NarrationClient, SpeechClip};
pub use messages::{GroundingChunk, WebSource};

use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used to narrate the history of a photographed location
pub const NARRATIVE_MODEL: &str = "gemini-2.5-flash";

/// Model used for web-grounded safety insight
pub const INSIGHT_MODEL: &str = "gemini-2.5-flash";

/// Model used for speech synthesis
pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Sample rate of the speech endpoint's PCM output (24 kHz)
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Channel count of the speech endpoint's PCM output (mono)
pub const SPEECH_CHANNELS: u16 = 1;

/// Default voice for synthesized narration
pub const DEFAULT_VOICE: &str = "Zephyr";

/// Configuration for reaching the service
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL of the service API
    pub base_url: String,
    /// Model identifier for scene narration
    pub narrative_model: String,
    /// Model identifier for grounded insight
    pub insight_model: String,
    /// Model identifier for speech synthesis
    pub speech_model: String,
    /// Per-request timeout, `None` for the HTTP client default
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Configuration with the stock models and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            narrative_model: NARRATIVE_MODEL.to_string(),
            insight_model: INSIGHT_MODEL.to_string(),
            speech_model: SPEECH_MODEL.to_string(),
            timeout: Some(Duration::from_secs(120)),
        }
    }
}
