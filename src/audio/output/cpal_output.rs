// ABOUTME: cpal-based audio output implementation
// ABOUTME: Explicitly opened and released device stream fed from a lock-free queue

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam::queue::SegQueue;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::audio::output::{AudioOutput, OutputFormat};
use crate::audio::types::AudioBuffer;
use crate::error::Error;

/// Audio output backed by the platform's default cpal device.
///
/// The device stream is acquired in [`CpalOutput::open`] and released in
/// [`CpalOutput::close`] (or on drop). There is no process-wide context: each
/// output owns its stream for exactly as long as the value lives.
pub struct CpalOutput {
    format: OutputFormat,
    queue: Arc<SegQueue<f32>>,
    callback_error: Arc<Mutex<Option<String>>>,
    stream: Option<cpal::Stream>,
}

impl std::fmt::Debug for CpalOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpalOutput")
            .field("format", &self.format)
            .field("queue", &self.queue)
            .field("callback_error", &self.callback_error)
            .finish_non_exhaustive()
    }
}

impl CpalOutput {
    /// Open the default output device at the given format and start its stream.
    pub fn open(format: OutputFormat) -> Result<Self, Error> {
        if format.sample_rate == 0 || format.channels == 0 {
            return Err(Error::InvalidArgument(
                "output format must have a positive sample rate and channel count".to_string(),
            ));
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Output("no default output device".to_string()))?;

        let config = cpal::StreamConfig {
            channels: format.channels,
            sample_rate: format.sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let queue: Arc<SegQueue<f32>> = Arc::new(SegQueue::new());
        let callback_error: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let data_queue = Arc::clone(&queue);
        let error_slot = Arc::clone(&callback_error);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for slot in data.iter_mut() {
                        // Underruns play silence rather than stale samples
                        *slot = data_queue.pop().unwrap_or(0.0);
                    }
                },
                move |err| {
                    *error_slot.lock() = Some(err.to_string());
                },
                None,
            )
            .map_err(|e| Error::Output(format!("failed to build output stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| Error::Output(format!("failed to start output stream: {}", e)))?;

        log::info!(
            "opened output device {} at {} Hz, {} channel(s)",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            format.sample_rate,
            format.channels
        );

        Ok(Self {
            format,
            queue,
            callback_error,
            stream: Some(stream),
        })
    }

    /// Stop the stream and release the device.
    pub fn close(mut self) -> Result<(), Error> {
        self.release()
    }

    fn release(&mut self) -> Result<(), Error> {
        if let Some(stream) = self.stream.take() {
            stream
                .pause()
                .map_err(|e| Error::Output(format!("failed to stop output stream: {}", e)))?;
        }
        while self.queue.pop().is_some() {}
        Ok(())
    }
}

impl AudioOutput for CpalOutput {
    fn write(&mut self, buffer: &AudioBuffer) -> Result<(), Error> {
        if let Some(err) = self.callback_error.lock().take() {
            return Err(Error::Output(err));
        }
        if self.stream.is_none() {
            return Err(Error::Output("output stream already closed".to_string()));
        }
        if buffer.sample_rate() != self.format.sample_rate
            || buffer.channel_count() != self.format.channels as usize
        {
            return Err(Error::Output(format!(
                "buffer format {} Hz x{} does not match output {} Hz x{}",
                buffer.sample_rate(),
                buffer.channel_count(),
                self.format.sample_rate,
                self.format.channels
            )));
        }

        for sample in buffer.interleaved() {
            self.queue.push(sample);
        }
        Ok(())
    }

    fn queued_frames(&self) -> usize {
        self.queue.len() / self.format.channels as usize
    }

    fn discard(&mut self) {
        while self.queue.pop().is_some() {}
    }

    fn format(&self) -> &OutputFormat {
        &self.format
    }
}

impl Drop for CpalOutput {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
