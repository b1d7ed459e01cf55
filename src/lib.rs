#![cfg(target_arch = "wasm32")]
//! Browser entry point. Wires the gate, the content sections and one
//! animation loop per canvas, then hands control to the browser's
//! requestAnimationFrame.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::core::{Celebration, Trail};
use crate::frame::{mix_seed, ConfettiSurface, SceneKind, SceneSurface, Surface, TrailSurface};
use crate::input::PointerState;

mod config;
mod core;
mod dom;
mod events;
mod frame;
mod gate;
mod input;
mod music;
mod overlay;
mod render;
mod scenes;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = config::load();
    // One base seed per page load; surfaces derive their own from it.
    let base_seed = js_sys::Date::now() as u64;

    // Gate and celebration confetti.
    let celebration = Rc::new(RefCell::new(Celebration::new()));
    if let Some(canvas) = dom::get_canvas(&document, "confettiCanvas") {
        dom::wire_canvas_resize(&canvas);
        if let Some(ctx) = dom::context_2d(&canvas) {
            start_surface(ConfettiSurface::new(
                canvas,
                ctx,
                celebration.clone(),
                mix_seed(base_seed, 1),
            ));
        }
    }
    gate::wire_gate(&document, celebration);

    // Static content and chrome.
    scenes::populate(&document, &config);
    scenes::setup_scroll(&document);
    music::wire_music(&document, &config.music);
    events::keyboard::wire_global_keydown(&document);

    // Shared pointer position and trail, written by the pointer handlers
    // and read by the surface loops.
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let trail = Rc::new(RefCell::new(Trail::new()));
    events::pointer::wire_pointer_tracking(events::pointer::PointerWiring {
        pointer: pointer.clone(),
        trail: trail.clone(),
    });

    let scene_canvases: &[(&str, SceneKind)] = &[
        ("canvasOpening", SceneKind::Opening),
        ("canvasHeartTree", SceneKind::SingleTree),
        ("canvasStory", SceneKind::Scenic),
        ("canvasGallery", SceneKind::Scenic),
        ("canvasNotes", SceneKind::Scenic),
        ("canvasFinal", SceneKind::Scenic),
    ];
    for (i, &(id, kind)) in scene_canvases.iter().enumerate() {
        let Some(canvas) = dom::get_canvas(&document, id) else {
            log::warn!("missing canvas #{id}, skipping");
            continue;
        };
        dom::wire_canvas_resize(&canvas);
        let Some(ctx) = dom::context_2d(&canvas) else {
            log::warn!("no 2d context on #{id}, skipping");
            continue;
        };
        let pending_taps: Rc<RefCell<Vec<glam::Vec2>>> = Rc::new(RefCell::new(Vec::new()));
        if kind == SceneKind::SingleTree {
            events::pointer::wire_tree_taps(&canvas, pending_taps.clone(), "heartTreeCount");
        }
        start_surface(SceneSurface::new(
            canvas,
            ctx,
            kind,
            mix_seed(base_seed, 2 + i as u64),
            pointer.clone(),
            pending_taps,
        ));
    }

    if let Some(canvas) = dom::get_canvas(&document, "trailCanvas") {
        dom::wire_canvas_resize(&canvas);
        if let Some(ctx) = dom::context_2d(&canvas) {
            start_surface(TrailSurface::new(canvas, ctx, trail));
        }
    }

    Ok(())
}

fn start_surface(surface: impl Surface + 'static) {
    frame::start_loop(Rc::new(RefCell::new(surface)));
}
