// ABOUTME: Wire message type definitions and serialization
// ABOUTME: Request/response bodies for the service's generateContent endpoint

use serde::{Deserialize, Serialize};

/// Request body for the content-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for every call this crate makes
    pub contents: Vec<Content>,

    /// Tools the model may invoke (web search for grounded insight)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    /// Output shaping (response modality, speech voice)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered message parts
    pub parts: Vec<Part>,
}

/// One part of a turn: text, inline binary data, or both absent on some
/// server-side parts this crate does not consume
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Plain text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64-encoded binary content with its mime type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An inline-data part carrying base64-encoded bytes.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Self::default()
        }
    }
}

/// Base64-encoded binary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Mime type, e.g. `image/jpeg` or `audio/L16;codec=pcm;rate=24000`
    pub mime_type: String,
    /// Standard base64 encoding of the payload bytes
    pub data: String,
}

/// Tool declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web search grounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

/// Web search tool; carries no configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Output shaping for a generation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested output modalities, e.g. `["AUDIO"]` for speech
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    /// Speech synthesis configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice selection
    pub voice_config: VoiceConfig,
}

/// Voice selection wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// One of the service's prebuilt voices
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Prebuilt voice selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name, e.g. `Zephyr`
    pub voice_name: String,
}

/// Response from the content-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates; the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Citations attached when the model used web search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Citation metadata for a grounded response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Source references backing the generated text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One citation/source reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web source, when the chunk came from search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

/// A web page the service cited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSource {
    /// Page URL
    pub uri: String,
    /// Page title, when the service supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Parse the sample rate out of a raw-PCM mime type such as
/// `audio/L16;codec=pcm;rate=24000`.
pub fn parse_pcm_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .find_map(|param| param.trim().strip_prefix("rate=")?.parse().ok())
}
