//! Browser entry points.
//!
//! ```js
//! import init, * as ink from "./pkg/inkdust_web.js";
//! await init();
//! ink.inkdust_init(textCanvas, canvas, null, null);
//! ink.inkdust_resize(window.innerWidth, window.innerHeight);
//! window.addEventListener("resize", () => ink.inkdust_resize(window.innerWidth, window.innerHeight));
//! window.addEventListener("mousemove", e => ink.inkdust_pointer_move(e.clientX, e.clientY));
//! window.addEventListener("touchmove", e => {
//!     const t = e.touches[0];
//!     ink.inkdust_pointer_move(t.clientX, t.clientY);
//! });
//! const frame = now => { ink.inkdust_tick(now); requestAnimationFrame(frame); };
//! requestAnimationFrame(frame);
//! ```

pub mod runner;
pub mod surface;

pub use runner::FieldRunner;
pub use surface::CanvasSurface;

use std::cell::RefCell;

use inkdust::{InkConfig, InputEvent};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

/// Run `f` on the runner, or log and return `None` before `inkdust_init`.
fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("inkdust not initialized; call inkdust_init() first");
                None
            }
        }
    })
}

/// Set up the field on two canvases.
///
/// `config_json` overrides any subset of the defaults. `seed` fixes the
/// random sequence and takes precedence over `stage.seed`; with neither,
/// every page load draws a fresh seed.
#[wasm_bindgen]
pub fn inkdust_init(
    text_canvas: HtmlCanvasElement,
    canvas: HtmlCanvasElement,
    config_json: Option<String>,
    seed: Option<u32>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = match config_json.as_deref() {
        Some(json) => InkConfig::from_json(json),
        None => Ok(InkConfig::default()),
    }
    .map_err(|err| {
        log::error!("bad config: {err}");
        JsValue::from_str(&err.to_string())
    })?;

    let seed = match seed {
        Some(seed) => seed as u64,
        None => config
            .stage
            .seed_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64),
    };
    config.stage.seed = Some(seed);

    let runner = FieldRunner::new(config, text_canvas, canvas).map_err(|err| {
        log::error!("init failed: {err}");
        JsValue::from_str(&err.to_string())
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("inkdust: initialized");
    Ok(())
}

/// Advance one animation frame; `now` is the rAF timestamp in milliseconds.
#[wasm_bindgen]
pub fn inkdust_tick(now: f64) {
    with_runner(|r| r.tick(now));
}

#[wasm_bindgen]
pub fn inkdust_pointer_move(client_x: f32, client_y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { client_x, client_y }));
}

/// Override the canvas page offset used to translate pointer coordinates.
#[wasm_bindgen]
pub fn inkdust_set_canvas_offset(x: f32, y: f32) {
    with_runner(|r| r.set_offset(x, y));
}

/// Resize both canvases, e.g. to `window.innerWidth × window.innerHeight`.
#[wasm_bindgen]
pub fn inkdust_resize(width: u32, height: u32) {
    with_runner(|r| {
        r.push_input(InputEvent::Resize { width, height });
        r.refresh_offset();
    });
}

/// Sample a new phrase on the next frame.
#[wasm_bindgen]
pub fn inkdust_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

#[wasm_bindgen]
pub fn inkdust_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn inkdust_generation() -> u32 {
    with_runner(|r| r.generation()).unwrap_or(0)
}
