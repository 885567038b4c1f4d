//! Browser bindings for the orrery.
//!
//! One session lives in a `thread_local!` runner; every export below is a
//! free function because wasm-bindgen cannot export the runner directly.

pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use orrery_core::{BodyId, InputEvent};

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

fn push(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

/// Start a session. `config_json` overrides any subset of the defaults.
#[wasm_bindgen]
pub fn orrery_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = OrreryRunner::from_json(config_json.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_enter(body: u32) {
    push(InputEvent::PointerEnter { body: BodyId(body) });
}

#[wasm_bindgen]
pub fn orrery_pointer_leave(body: u32) {
    push(InputEvent::PointerLeave { body: BodyId(body) });
}

#[wasm_bindgen]
pub fn orrery_click(body: u32) {
    push(InputEvent::Click { body: BodyId(body) });
}

#[wasm_bindgen]
pub fn orrery_close() {
    push(InputEvent::Close);
}

#[wasm_bindgen]
pub fn orrery_orbit(yaw: f32, pitch: f32) {
    push(InputEvent::Orbit { yaw, pitch });
}

#[wasm_bindgen]
pub fn orrery_zoom(factor: f32) {
    push(InputEvent::Zoom { factor });
}

#[wasm_bindgen]
pub fn orrery_toggle_mute() {
    push(InputEvent::ToggleMute);
}

// ---- Assets ----

#[wasm_bindgen]
pub fn orrery_load_manifest(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_manifest(json)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn orrery_mark_asset_ready(path: &str) -> bool {
    with_runner(|r| r.mark_asset_ready(path))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

#[wasm_bindgen]
pub fn get_body_data_offset() -> u32 {
    with_runner(|r| r.layout().body_data_offset as u32)
}

#[wasm_bindgen]
pub fn get_orbit_data_offset() -> u32 {
    with_runner(|r| r.layout().orbit_data_offset as u32)
}

#[wasm_bindgen]
pub fn get_light_data_offset() -> u32 {
    with_runner(|r| r.layout().light_data_offset as u32)
}

#[wasm_bindgen]
pub fn get_cue_data_offset() -> u32 {
    with_runner(|r| r.layout().cue_data_offset as u32)
}

#[wasm_bindgen]
pub fn get_elapsed() -> f32 {
    with_runner(|r| r.elapsed())
}

/// Body id for a mesh name, or -1.
#[wasm_bindgen]
pub fn get_body_id(name: &str) -> i32 {
    with_runner(|r| r.body_id(name).map_or(-1, |id| id.0 as i32))
}

#[wasm_bindgen]
pub fn get_body_title(body: u32) -> Option<String> {
    with_runner(|r| r.title(BodyId(body)).map(str::to_string))
}

#[wasm_bindgen]
pub fn get_body_description(body: u32) -> Option<String> {
    with_runner(|r| r.description(BodyId(body)).map(str::to_string))
}

/// Background field baked to an equirectangular rgb float image.
#[wasm_bindgen]
pub fn bake_background(width: u32, height: u32) -> js_sys::Float32Array {
    let pixels = with_runner(|r| r.bake_background(width, height));
    js_sys::Float32Array::from(pixels.as_slice())
}
