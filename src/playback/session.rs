// ABOUTME: Playback session implementation
// ABOUTME: Owns the output, enforces one active buffer, supersedes stale playback

use crate::audio::output::AudioOutput;
use crate::audio::types::AudioBuffer;
use crate::error::Error;

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No narration has been requested yet
    Idle,
    /// A narration request is in flight
    Loading,
    /// Decoded audio is queued on the output
    Playing,
    /// Playback finished or was stopped
    Stopped,
}

/// Single-owner playback session over an [`AudioOutput`].
///
/// The session guarantees that at most one decoded buffer is scheduled on the
/// output at a time. Starting a new playback supersedes the previous one:
/// queued audio is discarded before the new buffer is written, and the old
/// buffer is dropped with it.
pub struct PlaybackSession<O: AudioOutput> {
    output: O,
    state: PlaybackState,
}

impl<O: AudioOutput> PlaybackSession<O> {
    /// Create an idle session that owns `output`.
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: PlaybackState::Idle,
        }
    }

    /// Current session state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Mark a narration request as in flight.
    ///
    /// Valid from every state. Leaving `Playing` discards whatever audio is
    /// still queued, since the request supersedes it.
    pub fn begin_loading(&mut self) {
        if self.state == PlaybackState::Playing {
            self.output.discard();
        }
        log::debug!("playback session: {:?} -> Loading", self.state);
        self.state = PlaybackState::Loading;
    }

    /// Schedule a decoded buffer and enter `Playing`.
    ///
    /// Valid from `Loading` (the normal path) and from `Playing` (the new
    /// buffer supersedes the one currently queued). Calling this from `Idle`
    /// or `Stopped` is a [`Error::Playback`] error: the owner must announce
    /// the request with [`begin_loading`](Self::begin_loading) first.
    pub fn play(&mut self, buffer: AudioBuffer) -> Result<(), Error> {
        match self.state {
            PlaybackState::Loading => {}
            PlaybackState::Playing => self.output.discard(),
            state => {
                return Err(Error::Playback(format!(
                    "cannot play from {:?} state",
                    state
                )))
            }
        }

        self.output.write(&buffer)?;
        log::debug!(
            "playback session: {:?} -> Playing ({} frames)",
            self.state,
            buffer.frame_count()
        );
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Stop playback and discard any queued audio.
    ///
    /// Idempotent once stopped. Stopping an `Idle` session is an error since
    /// no playback was ever started.
    pub fn stop(&mut self) -> Result<(), Error> {
        match self.state {
            PlaybackState::Idle => Err(Error::Playback(
                "cannot stop a session that never started".to_string(),
            )),
            PlaybackState::Stopped => Ok(()),
            _ => {
                self.output.discard();
                log::debug!("playback session: {:?} -> Stopped", self.state);
                self.state = PlaybackState::Stopped;
                Ok(())
            }
        }
    }

    /// Observe output progress, moving `Playing` to `Stopped` once the queue
    /// has drained. Returns the state after the check.
    pub fn advance(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Playing && self.output.queued_frames() == 0 {
            log::debug!("playback session: Playing -> Stopped (drained)");
            self.state = PlaybackState::Stopped;
        }
        self.state
    }

    /// Release the session and hand the output back to the caller.
    pub fn into_output(self) -> O {
        self.output
    }
}
