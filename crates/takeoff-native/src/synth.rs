//! cpal output stream rendering the synthesized takeoff cues.
//!
//! The stream is opened on the first cue request; the audio callback shares
//! only the voice list with the UI thread.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Sample;
use std::sync::{Arc, Mutex, MutexGuard};
use takeoff_core::cue::{cue_notes, CueNote};
use takeoff_core::{AudioError, CuePlayer, TakeoffMode};

const ATTACK_SEC: f32 = 0.01;
const RELEASE_SEC: f32 = 0.12;
const MASTER_GAIN: f32 = 0.3;

#[derive(Clone)]
struct Voice {
    start_sample: u64,
    total_samples: u64,
    attack_samples: u64,
    release_samples: u64,
    phase: f32,     // radians
    phase_inc: f32, // radians per sample
    amplitude: f32,
}

struct SynthState {
    sample_rate: f32,
    clock: u64,
    voices: Vec<Voice>,
    muted: bool,
}

impl SynthState {
    fn schedule(&mut self, notes: &[CueNote]) {
        let sr = self.sample_rate;
        let now = self.clock;
        for n in notes {
            let total = ((n.duration_sec * sr) as u64).max(1);
            self.voices.push(Voice {
                start_sample: now + (n.onset_sec * sr) as u64,
                total_samples: total,
                attack_samples: ((ATTACK_SEC * sr) as u64).min(total),
                release_samples: ((RELEASE_SEC * sr) as u64).min(total),
                phase: 0.0,
                phase_inc: 2.0 * std::f32::consts::PI * n.frequency_hz / sr,
                amplitude: n.velocity.min(1.0),
            });
        }
    }

    fn next_sample(&mut self) -> f32 {
        let clock = self.clock;
        self.clock += 1;
        let mut out = 0.0_f32;
        self.voices.retain_mut(|v| {
            if clock < v.start_sample {
                return true;
            }
            let n = clock - v.start_sample;
            if n >= v.total_samples {
                return false;
            }
            let env = if n < v.attack_samples {
                n as f32 / v.attack_samples.max(1) as f32
            } else if n > v.total_samples.saturating_sub(v.release_samples) {
                let rel_n = n - (v.total_samples - v.release_samples);
                1.0 - rel_n as f32 / v.release_samples.max(1) as f32
            } else {
                1.0
            };
            // sine with a touch of second harmonic
            let s = v.phase.sin() + 0.25 * (2.0 * v.phase).sin();
            out += s * v.amplitude * env;
            v.phase += v.phase_inc;
            if v.phase > 2.0 * std::f32::consts::PI {
                v.phase -= 2.0 * std::f32::consts::PI;
            }
            true
        });
        if self.muted {
            0.0
        } else {
            (out * MASTER_GAIN).tanh()
        }
    }
}

fn lock(state: &Mutex<SynthState>) -> MutexGuard<'_, SynthState> {
    match state.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct CueSynth {
    state: Arc<Mutex<SynthState>>,
    _stream: cpal::Stream,
}

impl CueSynth {
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| AudioError::Device("no default output device".into()))?;
        let config = device
            .default_output_config()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        let channels = config.channels() as usize;
        let state = Arc::new(Mutex::new(SynthState {
            sample_rate: config.sample_rate().0 as f32,
            clock: 0,
            voices: Vec::new(),
            muted: false,
        }));

        let err_fn = |err: cpal::StreamError| log::error!("[audio] stream error: {err}");
        let stream_config: cpal::StreamConfig = config.clone().into();
        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &stream_config, channels, Arc::clone(&state), err_fn)
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &stream_config, channels, Arc::clone(&state), err_fn)
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &stream_config, channels, Arc::clone(&state), err_fn)
            }
            other => {
                return Err(AudioError::Device(format!(
                    "unsupported sample format {other:?}"
                )))
            }
        }
        .map_err(|e| AudioError::Device(e.to_string()))?;
        stream
            .play()
            .map_err(|e| AudioError::PlaybackBlocked(e.to_string()))?;
        log::info!(
            "[audio] cpal stream {} Hz, {} ch",
            config.sample_rate().0,
            channels
        );
        Ok(Self {
            state,
            _stream: stream,
        })
    }
}

impl CuePlayer for CueSynth {
    fn play(&mut self, mode: TakeoffMode) -> Result<(), AudioError> {
        let notes = cue_notes(mode);
        lock(&self.state).schedule(&notes);
        log::info!("[audio] cue {} ({} notes)", mode.cue_name(), notes.len());
        Ok(())
    }

    fn stop(&mut self) {
        lock(&self.state).voices.clear();
    }

    fn set_muted(&mut self, muted: bool) {
        lock(&self.state).muted = muted;
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<SynthState>>,
    err_fn: impl FnMut(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut guard = lock(&state);
            for frame in data.chunks_mut(channels.max(1)) {
                let v = T::from_sample(guard.next_sample());
                for s in frame.iter_mut() {
                    *s = v;
                }
            }
        },
        err_fn,
        None,
    )
}
