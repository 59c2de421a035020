use crate::mode::TakeoffMode;
use thiserror::Error;

/// Failures reported by an audio collaborator. None of them is fatal: the
/// controller logs them and carries on without sound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The environment refused to start playback (e.g. autoplay policy).
    #[error("playback blocked: {0}")]
    PlaybackBlocked(String),
    /// The cue asset could not be found or decoded.
    #[error("cue asset missing: {0}")]
    AssetMissing(String),
    /// No usable output device or stream.
    #[error("audio device error: {0}")]
    Device(String),
}

/// Plays the per-mode audio cue. Implemented by the web media element player,
/// the native synthesizer and test doubles.
pub trait CuePlayer {
    /// Start the cue for `mode` from the beginning.
    fn play(&mut self, mode: TakeoffMode) -> Result<(), AudioError>;
    /// Stop whatever is playing and rewind.
    fn stop(&mut self);
    fn set_muted(&mut self, muted: bool);
}
