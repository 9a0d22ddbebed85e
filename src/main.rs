//! Yes or No entry point
//!
//! Wires browser events to the card controller on the web. The native build
//! runs a headless placement demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_card {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::anyhow;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Event, KeyboardEvent};

    use yes_or_no::card::{CardController, CardInput, Effect};
    use yes_or_no::platform::{DomLayout, DomStage, add_listener};
    use yes_or_no::platform::dom::html_element;
    use yes_or_no::CardSettings;

    /// Card instance holding all page state
    struct CardApp {
        controller: CardController,
        layout: DomLayout,
        stage: DomStage,
        rng: Pcg32,
    }

    type Shared = Rc<RefCell<CardApp>>;

    /// Feed one input through the controller and apply what comes back
    fn dispatch(app: &Shared, input: CardInput) {
        let mut guard = app.borrow_mut();
        let CardApp {
            controller,
            layout,
            stage,
            rng,
        } = &mut *guard;

        for effect in controller.handle(input, &*layout, rng) {
            let name = effect.name();
            let result = match effect {
                Effect::StartBurst {
                    period_ms,
                    duration_ms,
                } => {
                    let app = Rc::clone(app);
                    stage.start_burst(period_ms, duration_ms, move || {
                        dispatch(&app, CardInput::SpawnTick)
                    })
                }
                other => stage.apply(other),
            };
            if let Err(e) = result {
                log::warn!("Effect {} failed: {:?}", name, e);
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("failed to init logger: {}", e))?;

        log::info!("Yes or No starting...");

        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        let settings = CardSettings::load();
        let ids = settings.elements.clone();

        let decline = html_element(&document, &ids.decline)?;
        let accept = html_element(&document, &ids.accept)?;
        let close = html_element(&document, &ids.close)?;
        let card = document
            .query_selector(&ids.card_selector)
            .map_err(|e| anyhow!("bad card selector {}: {:?}", ids.card_selector, e))?
            .ok_or_else(|| anyhow!("no element matches {}", ids.card_selector))?;

        let stage = DomStage::new(window.clone(), document.clone(), &settings)?;
        let has_music = stage.has_music();
        let overlay = stage.overlay().clone();
        let music_toggle = stage.music_toggle().cloned();

        let seed = js_sys::Date::now() as u64;
        let controller = CardController::new(settings, has_music);
        if let Some(toggle) = &music_toggle {
            toggle.set_text_content(Some(controller.music_label()));
        }

        let app: Shared = Rc::new(RefCell::new(CardApp {
            controller,
            layout: DomLayout::new(window.clone(), decline.clone(), card),
            stage,
            rng: Pcg32::seed_from_u64(seed),
        }));
        log::info!("Card initialized with seed: {} (music: {})", seed, has_music);

        setup_decline_handlers(&decline, &app)?;
        setup_overlay_handlers(&accept, &close, &overlay, &app)?;
        setup_window_handlers(&window, &document, &app)?;
        if let Some(toggle) = &music_toggle {
            setup_music_toggle(toggle, &app)?;
        }

        // `load` may already have fired before the module ran
        dispatch(&app, CardInput::PageLoaded);

        log::info!("Yes or No running!");
        Ok(())
    }

    fn js_err(e: JsValue) -> anyhow::Error {
        anyhow!("listener registration failed: {:?}", e)
    }

    fn setup_decline_handlers(decline: &web_sys::HtmlElement, app: &Shared) -> anyhow::Result<()> {
        // Pointer enter
        {
            let app = Rc::clone(app);
            add_listener(decline, "pointerenter", None, move |event: Event| {
                event.prevent_default();
                dispatch(&app, CardInput::DeclineApproached);
            })
            .map_err(js_err)?;
        }

        // Touch start - non-passive so the tap never lands
        {
            let app = Rc::clone(app);
            add_listener(decline, "touchstart", Some(false), move |event: Event| {
                event.prevent_default();
                dispatch(&app, CardInput::DeclineApproached);
            })
            .map_err(js_err)?;
        }
        Ok(())
    }

    fn setup_overlay_handlers(
        accept: &web_sys::HtmlElement,
        close: &web_sys::HtmlElement,
        overlay: &web_sys::HtmlElement,
        app: &Shared,
    ) -> anyhow::Result<()> {
        // Yes
        {
            let app = Rc::clone(app);
            add_listener(accept, "click", None, move |_event: Event| {
                dispatch(&app, CardInput::Accept);
            })
            .map_err(js_err)?;
        }

        // Close button
        {
            let app = Rc::clone(app);
            add_listener(close, "click", None, move |_event: Event| {
                dispatch(&app, CardInput::Close);
            })
            .map_err(js_err)?;
        }

        // Backdrop click (clicks on the modal content bubble up with another target)
        {
            let app = Rc::clone(app);
            let backdrop: JsValue = overlay.clone().into();
            add_listener(overlay, "click", None, move |event: Event| {
                let on_backdrop = event
                    .target()
                    .is_some_and(|target| JsValue::from(target) == backdrop);
                dispatch(&app, CardInput::OverlayClicked { on_backdrop });
            })
            .map_err(js_err)?;
        }
        Ok(())
    }

    fn setup_window_handlers(
        window: &web_sys::Window,
        document: &web_sys::Document,
        app: &Shared,
    ) -> anyhow::Result<()> {
        // Escape
        {
            let app = Rc::clone(app);
            add_listener(document, "keydown", None, move |event: Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    dispatch(&app, CardInput::KeyPressed(event.key()));
                }
            })
            .map_err(js_err)?;
        }

        // Load
        {
            let app = Rc::clone(app);
            add_listener(window, "load", None, move |_event: Event| {
                dispatch(&app, CardInput::PageLoaded);
            })
            .map_err(js_err)?;
        }

        // Resize
        {
            let app = Rc::clone(app);
            add_listener(window, "resize", None, move |_event: Event| {
                dispatch(&app, CardInput::ViewportResized);
            })
            .map_err(js_err)?;
        }
        Ok(())
    }

    fn setup_music_toggle(toggle: &web_sys::Element, app: &Shared) -> anyhow::Result<()> {
        let app = Rc::clone(app);
        add_listener(toggle, "click", None, move |_event: Event| {
            dispatch(&app, CardInput::ToggleMusic);
        })
        .map_err(js_err)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_card::run() {
        log::error!("init error: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Yes or No (native) starting...");
    log::info!("The card runs in the browser - use `trunk serve` for the web version");

    println!("\nRunning placement demo...");
    placement_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn placement_demo() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use yes_or_no::placement::{FixedLayout, LayoutProbe, PlacementParams, Size, place_with_probe};

    let params = PlacementParams::default();
    let mut rng = Pcg32::seed_from_u64(2026);

    for (w, h) in [(1024.0, 768.0), (390.0, 844.0), (150.0, 90.0)] {
        let layout = FixedLayout::centered(
            Size::new(w, h),
            Size::new(120.0, 40.0),
            Size::new(w * 0.6, h * 0.4),
        );
        let zone = layout.avoid_region().expand(params.avoid_margin);
        let p = place_with_probe(&layout, &params, &mut rng);
        println!(
            "{:>5}x{:<4} -> ({:>4}, {:>4}) attempts={:<2} fallback={} zone=({}, {}, {}, {})",
            w, h, p.x, p.y, p.attempts, p.fell_back, zone.left, zone.top, zone.right, zone.bottom
        );
    }
    println!("✓ Placement demo finished");
}
