// ABOUTME: Audio output trait and implementations
// ABOUTME: Provides abstraction over platform audio APIs (cpal, ALSA, etc.)

/// cpal-based audio output implementation
pub mod cpal_output;

pub use cpal_output::CpalOutput;

use crate::audio::types::AudioBuffer;
use crate::error::Error;

/// Format an output device was opened with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: u16,
}

/// Audio output trait for playing decoded buffers
pub trait AudioOutput {
    /// Queue a decoded buffer for playback
    fn write(&mut self, buffer: &AudioBuffer) -> Result<(), Error>;

    /// Frames queued but not yet delivered to the device
    fn queued_frames(&self) -> usize;

    /// Drop any queued audio without playing it
    fn discard(&mut self);

    /// Get the audio format this output expects
    fn format(&self) -> &OutputFormat;
}
