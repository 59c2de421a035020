//! Cue playback through a single `<audio>` element.
//!
//! Browsers may refuse `play()` until the user has interacted with the page;
//! the rejected promise is logged and the selection carries on silently.

use crate::constants::cue_url;
use takeoff_core::{AudioError, CuePlayer, TakeoffMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct MediaCuePlayer {
    element: web::HtmlAudioElement,
    on_error: Closure<dyn FnMut()>,
}

impl MediaCuePlayer {
    pub fn new() -> Result<Self, AudioError> {
        let element = web::HtmlAudioElement::new()
            .map_err(|e| AudioError::Device(format!("{:?}", e)))?;
        element.set_preload("auto");

        let el = element.clone();
        let on_error = Closure::wrap(Box::new(move || {
            log::warn!("[audio] {}", AudioError::AssetMissing(el.src()));
        }) as Box<dyn FnMut()>);
        element
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .map_err(|e| AudioError::Device(format!("{:?}", e)))?;

        Ok(Self { element, on_error })
    }
}

impl CuePlayer for MediaCuePlayer {
    fn play(&mut self, mode: TakeoffMode) -> Result<(), AudioError> {
        self.element.set_src(&cue_url(&mode.cue_name()));
        self.element.set_current_time(0.0);
        let promise = self
            .element
            .play()
            .map_err(|e| AudioError::PlaybackBlocked(format!("{:?}", e)))?;
        let cue = mode.cue_name();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!(
                    "[audio] cue {}: {}",
                    cue,
                    AudioError::PlaybackBlocked(format!("{:?}", e))
                );
            }
        });
        Ok(())
    }

    fn stop(&mut self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }
}

impl Drop for MediaCuePlayer {
    fn drop(&mut self) {
        _ = self.element.pause();
        _ = self
            .element
            .remove_event_listener_with_callback("error", self.on_error.as_ref().unchecked_ref());
        self.element.remove_attribute("src").ok();
    }
}
