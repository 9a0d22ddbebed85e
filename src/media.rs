//! Media playback using HTML media elements
//!
//! Wraps the celebration video and the optional background track. Browsers
//! may reject `play()` under their autoplay policy; that rejection is logged
//! at debug level and otherwise ignored.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlMediaElement};

/// A `<video>` or `<audio>` element
pub struct MediaTrack {
    name: &'static str,
    element: HtmlMediaElement,
}

impl MediaTrack {
    /// Look up a media element by id
    pub fn find(document: &Document, id: &str, name: &'static str) -> Option<Self> {
        let element = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlMediaElement>()
            .ok()?;
        Some(Self { name, element })
    }

    /// Start playback; a blocked autoplay is swallowed
    pub fn play(&self) {
        let promise = match self.element.play() {
            Ok(promise) => promise,
            Err(e) => {
                log::debug!("{} play() threw: {:?}", self.name, e);
                return;
            }
        };

        let name = self.name;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("{} playback blocked: {:?}", name, e);
            }
        });
    }

    /// Pause, keeping the current position
    pub fn pause(&self) {
        let _ = self.element.pause();
    }

    /// Pause and seek back to the start
    pub fn stop(&self) {
        self.pause();
        self.element.set_current_time(0.0);
    }

    /// Set volume (0.0 - 1.0)
    pub fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn set_looping(&self, looped: bool) {
        self.element.set_loop(looped);
    }
}
