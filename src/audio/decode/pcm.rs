// ABOUTME: Raw PCM decoder implementation
// ABOUTME: 16-bit little-endian interleaved samples to planar normalized f32

use crate::audio::decode::Decoder;
use crate::audio::types::AudioBuffer;
use crate::error::Error;

/// Decoder for headerless 16-bit little-endian interleaved PCM.
///
/// The speech endpoint emits raw sample data with no container, so the sample
/// rate and channel count are supplied up front by the caller. Samples are
/// normalized with the asymmetric 16-bit convention (divisor 32768), which
/// maps `-32768` to exactly `-1.0` and `32767` to just under `1.0`.
#[derive(Debug)]
pub struct PcmDecoder {
    sample_rate: u32,
    channels: u16,
}

impl PcmDecoder {
    /// Create a decoder for the given output format.
    ///
    /// Fails with [`Error::InvalidArgument`] when the sample rate or channel
    /// count is zero. Checked here so `decode` never has to.
    pub fn new(sample_rate: u32, channels: u16) -> Result<Self, Error> {
        if sample_rate == 0 {
            return Err(Error::InvalidArgument(
                "sample rate must be positive".to_string(),
            ));
        }
        if channels == 0 {
            return Err(Error::InvalidArgument(
                "channel count must be positive".to_string(),
            ));
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Sample rate this decoder stamps onto decoded buffers.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count this decoder de-interleaves into.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

impl Decoder for PcmDecoder {
    /// Decode interleaved samples into a planar buffer.
    ///
    /// Trailing bytes that do not fill a complete frame are dropped, not an
    /// error: the upstream emission may have been truncated mid-frame and the
    /// audible part is still worth playing. An empty input decodes to an
    /// empty buffer.
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, Error> {
        let channels = self.channels as usize;
        let bytes_per_frame = channels * 2;
        let frame_count = data.len() / bytes_per_frame;

        let mut planar: Vec<Vec<f32>> = (0..channels)
            .map(|_| Vec::with_capacity(frame_count))
            .collect();

        // chunks_exact drops the partial trailing frame, if any
        for frame in data.chunks_exact(bytes_per_frame) {
            for (c, sample) in frame.chunks_exact(2).enumerate() {
                let value = i16::from_le_bytes([sample[0], sample[1]]);
                planar[c].push(value as f32 / 32768.0);
            }
        }

        Ok(AudioBuffer::new(self.sample_rate, planar))
    }
}
