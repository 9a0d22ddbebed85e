//! DOM bindings for the card

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window,
};

use crate::card::{Effect, Particle};
use crate::media::MediaTrack;
use crate::placement::{LayoutProbe, Rect, Size};
use crate::settings::{CardSettings, ParticleSettings};

/// Find an element by id and cast it to `HtmlElement`
pub fn html_element(document: &Document, id: &str) -> anyhow::Result<HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow!("#{} is not an HTML element", id))
}

/// Register `handler` for `kind` events on `target` for the page lifetime.
///
/// `passive: Some(false)` is needed for touch handlers that call
/// `prevent_default`.
pub fn add_listener(
    target: &EventTarget,
    kind: &str,
    passive: Option<bool>,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    match passive {
        Some(passive) => {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        }
        None => {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        }
    }
    closure.forget();
    Ok(())
}

/// Live layout read straight from the DOM on every call
pub struct DomLayout {
    window: Window,
    decline: HtmlElement,
    card: Element,
}

impl DomLayout {
    pub fn new(window: Window, decline: HtmlElement, card: Element) -> Self {
        Self {
            window,
            decline,
            card,
        }
    }
}

impl LayoutProbe for DomLayout {
    fn viewport(&self) -> Size {
        let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(read(self.window.inner_width()), read(self.window.inner_height()))
    }

    fn control_size(&self) -> Size {
        Size::new(
            self.decline.offset_width() as f64,
            self.decline.offset_height() as f64,
        )
    }

    fn avoid_region(&self) -> Rect {
        let r = self.card.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

/// Applies controller effects to the page
pub struct DomStage {
    window: Window,
    document: Document,
    body: HtmlElement,
    overlay: HtmlElement,
    decline: HtmlElement,
    video: MediaTrack,
    music: Option<MediaTrack>,
    music_toggle: Option<Element>,
    particles: ParticleSettings,
    /// Interval handles of bursts that have not ended yet
    bursts: Rc<RefCell<Vec<i32>>>,
}

impl DomStage {
    pub fn new(window: Window, document: Document, settings: &CardSettings) -> anyhow::Result<Self> {
        let ids = &settings.elements;
        let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
        let overlay = html_element(&document, &ids.overlay)?;
        let decline = html_element(&document, &ids.decline)?;
        let video = MediaTrack::find(&document, &ids.video, "video")
            .ok_or_else(|| anyhow!("missing media element #{}", ids.video))?;

        // Music is optional; both the track and its toggle must be present
        let music = MediaTrack::find(&document, &ids.music, "music");
        let music_toggle = document.get_element_by_id(&ids.music_toggle);
        let (music, music_toggle) = match (music, music_toggle) {
            (Some(m), Some(t)) => (Some(m), Some(t)),
            (None, None) => (None, None),
            _ => {
                log::warn!(
                    "#{} and #{} must both exist - music disabled",
                    ids.music,
                    ids.music_toggle
                );
                (None, None)
            }
        };

        Ok(Self {
            window,
            document,
            body,
            overlay,
            decline,
            video,
            music,
            music_toggle,
            particles: settings.particles.clone(),
            bursts: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn has_music(&self) -> bool {
        self.music.is_some()
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }

    pub fn music_toggle(&self) -> Option<&Element> {
        self.music_toggle.as_ref()
    }

    /// Apply a single effect. `StartBurst` needs a tick callback and goes
    /// through [`DomStage::start_burst`] instead.
    pub fn apply(&mut self, effect: Effect) -> Result<(), JsValue> {
        match effect {
            Effect::MoveDecline { x, y } => {
                let style = self.decline.style();
                style.set_property("left", &format!("{}px", x))?;
                style.set_property("top", &format!("{}px", y))?;
            }
            Effect::SetOverlayVisible(visible) => {
                let display = if visible { "flex" } else { "none" };
                self.overlay.style().set_property("display", display)?;
            }
            Effect::SetDeclineVisible(visible) => {
                let style = self.decline.style();
                if visible {
                    style.remove_property("display")?;
                } else {
                    style.set_property("display", "none")?;
                }
            }
            Effect::PlayVideo => self.video.play(),
            Effect::ResetVideo => self.video.stop(),
            Effect::StartMusic { volume, looped } => {
                if let Some(music) = &self.music {
                    music.set_volume(volume);
                    music.set_looping(looped);
                    music.play();
                }
            }
            Effect::PauseMusic => {
                if let Some(music) = &self.music {
                    music.pause();
                }
            }
            Effect::StopMusic => {
                if let Some(music) = &self.music {
                    music.stop();
                }
            }
            Effect::SetMusicLabel(label) => {
                if let Some(toggle) = &self.music_toggle {
                    toggle.set_text_content(Some(&label));
                }
            }
            Effect::StartBurst { .. } => {
                log::warn!("StartBurst must go through start_burst()");
            }
            Effect::CancelBursts => self.cancel_bursts(),
            Effect::SpawnParticle(particle) => self.spawn_heart(&particle)?,
        }
        Ok(())
    }

    /// Run `on_tick` every `period_ms` until `duration_ms` has passed.
    ///
    /// The spawn closure is owned by the stop timer and dropped when it fires.
    pub fn start_burst(
        &mut self,
        period_ms: u32,
        duration_ms: u32,
        on_tick: impl FnMut() + 'static,
    ) -> Result<(), JsValue> {
        let tick = Closure::<dyn FnMut()>::new(on_tick);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                period_ms as i32,
            )?;
        self.bursts.borrow_mut().push(handle);

        let bursts = Rc::clone(&self.bursts);
        let stop = Closure::once_into_js(move || {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
            bursts.borrow_mut().retain(|h| *h != handle);
            drop(tick);
            log::debug!("Heart burst {} finished", handle);
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                stop.unchecked_ref(),
                duration_ms as i32,
            )?;
        Ok(())
    }

    fn cancel_bursts(&mut self) {
        for handle in self.bursts.borrow_mut().drain(..) {
            self.window.clear_interval_with_handle(handle);
        }
    }

    fn spawn_heart(&self, particle: &Particle) -> Result<(), JsValue> {
        let heart: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        heart.set_class_name(&self.particles.class_name);
        heart.set_text_content(Some(&self.particles.glyph));

        let style = heart.style();
        for (name, value) in particle.style_properties() {
            style.set_property(name, &value)?;
        }
        self.body.append_child(&heart)?;

        // Removed on schedule whether or not the fall finished
        let remove = Closure::once_into_js(move || heart.remove());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                particle.lifetime_ms as i32,
            )?;
        Ok(())
    }
}
