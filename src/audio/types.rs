// ABOUTME: Core audio type definitions
// ABOUTME: AudioBuffer holds planar normalized f32 samples plus a sample rate

use std::time::Duration;

/// Decoded multi-channel audio.
///
/// Samples are stored planar (`channel[c][frame]`), normalized to
/// `[-1.0, 1.0]`, with every channel holding the same number of frames.
/// A buffer is immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Create a buffer from planar channel data.
    ///
    /// All channels must already share a common length; the decoders in this
    /// crate guarantee that.
    pub(crate) fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        debug_assert!(channels.windows(2).all(|w| w[0].len() == w[1].len()));
        Self {
            sample_rate,
            channels,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples for one channel.
    ///
    /// # Panics
    /// Panics if `channel` is out of range.
    pub fn channel(&self, channel: usize) -> &[f32] {
        &self.channels[channel]
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Playback duration at this buffer's sample rate.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate as f64)
    }

    /// Re-interleave the planar channels for an output device.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frame_count();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            for ch in &self.channels {
                out.push(ch[i]);
            }
        }
        out
    }
}
