// ABOUTME: HTTP client implementation for the generative-AI service
// ABOUTME: Scene narration, web-grounded insight, and speech synthesis calls

use crate::audio::decode::transport;
use crate::error::Error;
use crate::service::messages::{
    parse_pcm_rate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GoogleSearch, InlineData, Part, PrebuiltVoiceConfig, SpeechConfig, Tool, VoiceConfig,
    WebSource,
};
use crate::service::{ServiceConfig, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE};

const SCENE_PROMPT: &str = "Identify the location shown in this photograph and narrate its \
history in a few short paragraphs written to be read aloud. If the exact place cannot be \
identified, narrate the history of the kind of place it appears to be.";

/// Web-grounded commentary plus the sources the service cited.
#[derive(Debug, Clone)]
pub struct Insight {
    /// Generated commentary text
    pub text: String,
    /// Web pages the service grounded the commentary in
    pub sources: Vec<WebSource>,
}

/// Raw speech audio returned by the synthesis endpoint.
///
/// `pcm` holds headerless 16-bit little-endian interleaved samples, already
/// stripped of their base64 transport encoding.
#[derive(Debug, Clone)]
pub struct SpeechClip {
    /// Raw PCM bytes
    pub pcm: Vec<u8>,
    /// Sample rate parsed from the response mime type
    pub sample_rate: u32,
    /// Channel count of the emission
    pub channels: u16,
}

/// Client for the hosted generative-AI service.
pub struct NarrationClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl NarrationClient {
    /// Build a client from the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("retrocast/{}", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::Transport(format!("failed to initialize HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Describe the location in `image` and narrate its history.
    pub async fn narrate_scene(&self, image: &[u8], mime_type: &str) -> Result<String, Error> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::inline(mime_type, transport::encode_base64(image)),
                    Part::text(SCENE_PROMPT),
                ],
            }],
            tools: None,
            generation_config: None,
        };

        let response = self.generate(&self.config.narrative_model, &request).await?;
        first_text(&response)
            .ok_or_else(|| Error::Service("response contained no narrative text".to_string()))
    }

    /// Fetch web-grounded safety commentary about `place`.
    pub async fn safety_insight(&self, place: &str) -> Result<Insight, Error> {
        let prompt = format!(
            "Using current web results, give a short safety briefing for a visitor to {}. \
Mention anything they should watch out for.",
            place
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            tools: Some(vec![Tool {
                google_search: Some(GoogleSearch::default()),
            }]),
            generation_config: None,
        };

        let response = self.generate(&self.config.insight_model, &request).await?;
        let text = first_text(&response)
            .ok_or_else(|| Error::Service("response contained no insight text".to_string()))?;

        let sources: Vec<WebSource> = response
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| m.grounding_chunks.iter().filter_map(|c| c.web.clone()).collect())
            .unwrap_or_default();

        log::info!("insight grounded in {} web source(s)", sources.len());
        Ok(Insight { text, sources })
    }

    /// Synthesize `text` into raw PCM speech using the given prebuilt voice.
    pub async fn synthesize_speech(&self, text: &str, voice: &str) -> Result<SpeechClip, Error> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(text)],
            }],
            tools: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.to_string(),
                        },
                    },
                }),
            }),
        };

        let response = self.generate(&self.config.speech_model, &request).await?;
        let audio = first_audio(&response)
            .ok_or_else(|| Error::Service("response contained no audio payload".to_string()))?;

        let pcm = transport::decode_base64(&audio.data)?;
        let sample_rate = parse_pcm_rate(&audio.mime_type).unwrap_or(SPEECH_SAMPLE_RATE);

        log::info!(
            "synthesized {} bytes of PCM at {} Hz ({})",
            pcm.len(),
            sample_rate,
            audio.mime_type
        );

        Ok(SpeechClip {
            pcm,
            sample_rate,
            channels: SPEECH_CHANNELS,
        })
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, Error> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Service(format!(
                "{} returned {}: {}",
                model,
                status,
                excerpt(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Service(format!("unparseable response: {}", e)))
    }
}

/// Concatenated text of the first candidate's text parts.
fn first_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First inline audio part of the first candidate.
fn first_audio(response: &GenerateContentResponse) -> Option<&InlineData> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| d.mime_type.starts_with("audio/"))
}

fn excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}
