// ABOUTME: Playback session state machine for narration audio
// ABOUTME: One owner drives idle -> loading -> playing -> stopped transitions

/// Playback session implementation
pub mod session;

pub use session::{PlaybackSession, PlaybackState};
