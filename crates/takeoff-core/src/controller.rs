//! Mode selection and change fan-out.
//!
//! [`ModeController`] is the single owner of the current mode and of the audio
//! output. A selection rebuilds the scene synchronously, notifies listeners,
//! and only then asks the cue player to stop the previous cue and start the
//! new one.

use crate::audio::{AudioError, CuePlayer};
use crate::mode::{ModeError, TakeoffMode};
use crate::scene::{RenderStyle, Scene, SceneComposer};

pub type ChangeListener = Box<dyn FnMut(TakeoffMode, &Scene)>;
pub type AudioOpener<A> = Box<dyn FnMut() -> Result<A, AudioError>>;

/// Lazily opened audio output. Opened on the first cue request and disposed by
/// [`ModeController::shutdown`].
struct AudioOutput<A> {
    open: Option<AudioOpener<A>>,
    live: Option<A>,
    muted: bool,
}

impl<A: CuePlayer> AudioOutput<A> {
    fn disabled() -> Self {
        Self {
            open: None,
            live: None,
            muted: false,
        }
    }

    fn get_or_open(&mut self) -> Option<&mut A> {
        if self.live.is_none() {
            let open = self.open.as_mut()?;
            match open() {
                Ok(mut player) => {
                    player.set_muted(self.muted);
                    log::info!("[audio] output opened");
                    self.live = Some(player);
                }
                Err(e) => {
                    // left unopened; the next selection tries again
                    log::warn!("[audio] output unavailable: {}", e);
                    return None;
                }
            }
        }
        self.live.as_mut()
    }

    fn dispose(&mut self) {
        if let Some(mut player) = self.live.take() {
            player.stop();
            log::info!("[audio] output disposed");
        }
        self.open = None;
    }
}

pub struct ModeController<A: CuePlayer> {
    mode: TakeoffMode,
    composer: SceneComposer,
    scene: Scene,
    listeners: Vec<ChangeListener>,
    audio: AudioOutput<A>,
}

impl<A: CuePlayer> ModeController<A> {
    /// Controller without audio. Starts on the default (slow) mode.
    pub fn new(style: RenderStyle) -> Self {
        let composer = SceneComposer::new(style);
        let mode = TakeoffMode::default();
        Self {
            mode,
            composer,
            scene: composer.build(mode),
            listeners: Vec::new(),
            audio: AudioOutput::disabled(),
        }
    }

    /// Controller whose audio output is created by `open` on first use.
    pub fn with_audio(
        style: RenderStyle,
        open: impl FnMut() -> Result<A, AudioError> + 'static,
    ) -> Self {
        let mut controller = Self::new(style);
        controller.audio.open = Some(Box::new(open));
        controller
    }

    pub fn mode(&self) -> TakeoffMode {
        self.mode
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn style(&self) -> RenderStyle {
        self.composer.style()
    }

    /// Register a callback run after every rebuild, before audio is touched.
    pub fn on_change(&mut self, listener: impl FnMut(TakeoffMode, &Scene) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switch to `mode`. Selecting the active mode again rebuilds and restarts
    /// its cue from the beginning.
    pub fn select(&mut self, mode: TakeoffMode) -> &Scene {
        log::info!("[mode] select {}", mode);
        self.mode = mode;
        self.rebuild();
        self.restart_cue();
        &self.scene
    }

    /// Select by tab identifier. Unknown ids are rejected before any state changes.
    pub fn select_id(&mut self, id: &str) -> Result<&Scene, ModeError> {
        let mode: TakeoffMode = id.parse()?;
        Ok(self.select(mode))
    }

    pub fn reset(&mut self) -> &Scene {
        self.select(TakeoffMode::Slow)
    }

    /// Restyle the current scene. Audio is left alone.
    pub fn set_style(&mut self, style: RenderStyle) -> &Scene {
        log::info!("[mode] style {:?}", style);
        self.composer.set_style(style);
        self.rebuild();
        &self.scene
    }

    pub fn is_muted(&self) -> bool {
        self.audio.muted
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio.open.is_some() || self.audio.live.is_some()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.audio.muted = muted;
        if let Some(player) = self.audio.live.as_mut() {
            player.set_muted(muted);
            if muted {
                player.stop();
            }
        }
        log::info!("[audio] muted={}", muted);
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.audio.muted;
        self.set_muted(muted);
        muted
    }

    /// The opened cue player, if any.
    pub fn player(&self) -> Option<&A> {
        self.audio.live.as_ref()
    }

    /// Stop and release the audio output. Later selections stay silent.
    pub fn shutdown(&mut self) {
        self.audio.dispose();
    }

    fn rebuild(&mut self) {
        self.scene = self.composer.build(self.mode);
        for listener in self.listeners.iter_mut() {
            listener(self.mode, &self.scene);
        }
    }

    fn restart_cue(&mut self) {
        if self.audio.muted {
            return;
        }
        let mode = self.mode;
        let Some(player) = self.audio.get_or_open() else {
            return;
        };
        player.stop();
        if let Err(e) = player.play(mode) {
            log::warn!("[audio] cue {} skipped: {}", mode.cue_name(), e);
        }
    }
}

impl<A: CuePlayer> Drop for ModeController<A> {
    fn drop(&mut self) {
        self.audio.dispose();
    }
}
