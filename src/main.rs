//! Court Tennis entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, HtmlElement,
        KeyboardEvent, TouchEvent,
    };

    use court_tennis::platform::{DisplaySize, fit_to_window};
    use court_tennis::renderer::CanvasRenderer;
    use court_tennis::sim::{Key, MoveIntent, Side};
    use court_tennis::{FrameScheduler, GameLoop, Hud, Settings, Tuning};

    /// Everything the browser callbacks share
    struct Host {
        game: GameLoop,
        renderer: CanvasRenderer,
        hud: DomHud,
        canvas: HtmlCanvasElement,
        display: DisplaySize,
    }

    /// Overlay, message and buttons in the page around the canvas
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_display(&self, id: &str, value: &str) {
            let Some(el) = self.document.get_element_by_id(id) else {
                log::warn!("Missing element #{}", id);
                return;
            };
            if let Some(el) = el.dyn_ref::<HtmlElement>() {
                if el.style().set_property("display", value).is_err() {
                    log::warn!("Failed to set display on #{}", id);
                }
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            match self.document.get_element_by_id(id) {
                Some(el) => el.set_text_content(Some(text)),
                None => log::warn!("Missing element #{}", id),
            }
        }
    }

    impl Hud for DomHud {
        fn match_started(&mut self) {
            self.set_display("overlay", "none");
            self.set_display("startBtn", "none");
        }

        fn pause_changed(&mut self, paused: bool) {
            self.set_text("pauseBtn", if paused { "Play" } else { "Pause" });
        }

        fn match_over(&mut self, _winner: Side, message: &str) {
            self.set_text("message", message);
            self.set_display("overlay", "flex");
            self.set_display("startBtn", "block");
        }
    }

    /// Schedules `frame` through `requestAnimationFrame`
    struct Raf(Rc<RefCell<Host>>);

    impl FrameScheduler for Raf {
        fn request_frame(&mut self) {
            request_animation_frame(self.0.clone());
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame(host: Rc<RefCell<Host>>) {
        let mut scheduler = Raf(host.clone());
        let mut h = host.borrow_mut();
        let Host {
            game,
            renderer,
            hud,
            ..
        } = &mut *h;
        game.on_frame(renderer, hud, &mut scheduler);
    }

    /// Run a lifecycle/input operation against the game with its collaborators
    fn dispatch(host: &Rc<RefCell<Host>>, f: impl FnOnce(&mut GameLoop, &mut DomHud, &mut Raf)) {
        let mut scheduler = Raf(host.clone());
        let mut h = host.borrow_mut();
        let Host { game, hud, .. } = &mut *h;
        f(game, hud, &mut scheduler);
    }

    fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
    where
        E: FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Failed to listen for {}", event);
        }
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Court Tennis starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        let settings = Settings::load();
        // Write back so fields added since the last visit land in storage
        settings.save();

        // Backing store stays at court size; only CSS size follows the window
        canvas.set_width(tuning.court_width as u32);
        canvas.set_height(tuning.court_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let renderer = CanvasRenderer::new(ctx, settings.font_family.clone());
        let host = Rc::new(RefCell::new(Host {
            game: GameLoop::new(tuning, settings, seed),
            renderer,
            hud: DomHud {
                document: document.clone(),
            },
            canvas: canvas.clone(),
            display: DisplaySize {
                width: 0.0,
                height: 0.0,
            },
        }));

        resize(&host);
        setup_input_handlers(&canvas, &host);
        setup_buttons(&document, &host);

        log::info!("Court Tennis ready");
    }

    /// Refit the canvas CSS size to the window. Never touches the court.
    fn resize(host: &Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let window_w = inner(window.inner_width()) as f32;
        let window_h = inner(window.inner_height()) as f32;

        let mut h = host.borrow_mut();
        let tuning = h.game.tuning();
        let display = fit_to_window(window_w, window_h, tuning.court_width, tuning.court_height);
        h.display = display;

        let style = h.canvas.style();
        let width = style.set_property("width", &format!("{}px", display.width));
        let height = style.set_property("height", &format!("{}px", display.height));
        if width.is_err() || height.is_err() {
            log::warn!("Failed to resize canvas");
        }
        log::debug!("Canvas display size {}x{}", display.width, display.height);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: &Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let host = host.clone();
            listen(&window, "keydown", move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    event.prevent_default();
                    dispatch(&host, |game, hud, scheduler| {
                        game.key_down(key, hud, scheduler)
                    });
                }
            });
        }
        {
            let host = host.clone();
            listen(&window, "keyup", move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    host.borrow_mut().game.key_up(key);
                }
            });
        }

        // Held keys would otherwise stick when focus leaves mid-press
        {
            let host = host.clone();
            listen(&window, "blur", move |_event: web_sys::Event| {
                host.borrow_mut().game.clear_input();
            });
        }

        {
            let host = host.clone();
            listen(&window, "resize", move |_event: web_sys::Event| {
                resize(&host);
            });
        }

        // Touch: paddle center follows the finger
        for name in ["touchstart", "touchmove"] {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            listen(canvas, name, move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let client_y = touch.client_y() as f32 - rect.top() as f32;
                    let mut h = host.borrow_mut();
                    let court_y = h
                        .display
                        .client_to_court_y(client_y, h.game.tuning().court_height);
                    h.game.pointer_moved(court_y);
                }
            });
        }
    }

    fn setup_buttons(document: &Document, host: &Rc<RefCell<Host>>) {
        let button = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("Missing button #{}", id);
            }
            el
        };

        for id in ["startBtn", "restartBtn"] {
            if let Some(btn) = button(id) {
                let host = host.clone();
                listen(&btn, "click", move |_event: web_sys::MouseEvent| {
                    dispatch(&host, |game, hud, scheduler| game.restart(hud, scheduler));
                });
            }
        }

        if let Some(btn) = button("pauseBtn") {
            let host = host.clone();
            listen(&btn, "click", move |_event: web_sys::MouseEvent| {
                dispatch(&host, |game, hud, scheduler| game.toggle_pause(hud, scheduler));
            });
        }

        // Direction buttons: hold to move
        for (id, intent) in [("upBtn", MoveIntent::Up), ("downBtn", MoveIntent::Down)] {
            let Some(btn) = button(id) else { continue };
            for name in ["mousedown", "touchstart"] {
                let host = host.clone();
                listen(&btn, name, move |event: web_sys::Event| {
                    event.prevent_default();
                    host.borrow_mut().game.start_move(intent);
                });
            }
            for name in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
                let host = host.clone();
                listen(&btn, name, move |_event: web_sys::Event| {
                    host.borrow_mut().game.stop_move();
                });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use court_tennis::renderer::{Color, Renderer};
    use court_tennis::sim::{GamePhase, Key, Side};
    use court_tennis::{FrameScheduler, GameLoop, Hud, Settings, Tuning};
    use glam::Vec2;

    /// Safety valve for endless rallies (10 minutes at 60 fps)
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    #[derive(Default)]
    struct PendingFrame(bool);

    impl FrameScheduler for PendingFrame {
        fn request_frame(&mut self) {
            self.0 = true;
        }
    }

    struct LogHud;

    impl Hud for LogHud {
        fn match_started(&mut self) {
            log::info!("HUD: match started");
        }
        fn pause_changed(&mut self, paused: bool) {
            log::debug!("HUD: paused = {}", paused);
        }
        fn match_over(&mut self, winner: Side, message: &str) {
            log::info!("HUD: {} ({:?})", message, winner);
        }
    }

    /// Counts draw calls instead of drawing
    #[derive(Default)]
    struct NullRenderer {
        frames: u32,
    }

    impl Renderer for NullRenderer {
        fn fill_background(&mut self, _width: f32, _height: f32, _color: Color) {
            self.frames += 1;
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
        fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _size_px: f32, _color: Color) {}
    }

    /// Hold the arrow key that moves the player paddle toward the ball
    fn autopilot(game: &mut GameLoop, hud: &mut LogHud, scheduler: &mut PendingFrame) {
        let state = game.state();
        let center = state.player_paddle_y + game.tuning().paddle_height / 2.0;
        let diff = state.ball_pos.y - center;

        game.key_up(Key::ArrowUp);
        game.key_up(Key::ArrowDown);
        if diff < -8.0 {
            game.key_down(Key::ArrowUp, hud, scheduler);
        } else if diff > 8.0 {
            game.key_down(Key::ArrowDown, hud, scheduler);
        }
    }

    pub fn run(tuning: Tuning, seed: u64) {
        let mut game = GameLoop::new(tuning, Settings::load(), seed);
        let mut hud = LogHud;
        let mut scheduler = PendingFrame::default();
        let mut renderer = NullRenderer::default();

        game.start(&mut hud, &mut scheduler);

        let mut frames = 0;
        while scheduler.0 && frames < MAX_FRAMES {
            scheduler.0 = false;
            autopilot(&mut game, &mut hud, &mut scheduler);
            game.on_frame(&mut renderer, &mut hud, &mut scheduler);
            frames += 1;
        }

        if game.phase() == GamePhase::Running {
            log::warn!("No winner after {} frames", frames);
            game.stop();
        }

        log::info!("Rendered {} frames", renderer.frames);
        match serde_json::to_string_pretty(game.state()) {
            Ok(json) => log::info!("Final state:\n{}", json),
            Err(e) => log::warn!("Failed to serialize final state: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Court Tennis (native) starting...");
    log::info!("Native mode plays a headless match - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| court_tennis::Tuning::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::error!("Failed to load tuning from {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => court_tennis::Tuning::default(),
    };

    headless::run(tuning, rand::random());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
