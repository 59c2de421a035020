//! Note schedule for synthesized takeoff cues.
//!
//! Shells that cannot load a recorded `<mode>-takeoff` file render the cue from
//! this schedule instead: one note per generation, pitched by the node height
//! and spaced tighter the faster the mode accelerates.

use crate::constants::NODE_COUNT;
use crate::growth::{color_for, position_for, Tier};
use crate::mode::TakeoffMode;

pub const CUE_ROOT_MIDI: f32 = 57.0; // A3
pub const CUE_RANGE_SEMITONES: f32 = 24.0;
pub const CUE_FIRST_INTERVAL_SEC: f32 = 0.22;
pub const CUE_NOTE_DURATION_SEC: f32 = 0.35;

/// A single scheduled tone, relative to the moment the cue starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CueNote {
    pub onset_sec: f32,
    pub frequency_hz: f32,
    pub velocity: f32,
    pub duration_sec: f32,
}

/// Ratio applied to the gap between consecutive notes.
pub fn interval_decay(mode: TakeoffMode) -> f32 {
    match mode {
        TakeoffMode::Slow => 1.0,
        TakeoffMode::Moderate => 0.9,
        TakeoffMode::Fast => 0.75,
    }
}

pub fn cue_notes(mode: TakeoffMode) -> Vec<CueNote> {
    let y0 = position_for(mode, 0);
    let span = (position_for(mode, NODE_COUNT - 1) - y0).max(f32::EPSILON);
    let decay = interval_decay(mode);
    let mut onset = 0.0_f32;
    let mut gap = CUE_FIRST_INTERVAL_SEC;
    let mut notes = Vec::with_capacity(NODE_COUNT);
    for i in 0..NODE_COUNT {
        let t = (position_for(mode, i) - y0) / span;
        let velocity = match color_for(mode, i) {
            Tier::Early => 0.4,
            Tier::Mid => 0.6,
            Tier::Late => 0.8,
        };
        notes.push(CueNote {
            onset_sec: onset,
            frequency_hz: midi_to_hz(CUE_ROOT_MIDI + t * CUE_RANGE_SEMITONES),
            velocity,
            duration_sec: CUE_NOTE_DURATION_SEC,
        });
        onset += gap;
        gap *= decay;
    }
    notes
}

/// Total cue length including the tail of the last note.
pub fn cue_length_sec(mode: TakeoffMode) -> f32 {
    cue_notes(mode)
        .last()
        .map(|n| n.onset_sec + n.duration_sec)
        .unwrap_or(0.0)
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
