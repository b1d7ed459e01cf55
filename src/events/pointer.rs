//! Pointer and touch wiring. This is the single writer for the shared
//! [`PointerState`]; every surface loop only reads it.

use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::CLICK_HEARTS_PER_TAP;
use crate::core::Trail;
use crate::dom;
use crate::input::{self, PointerState};

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Rc<RefCell<Trail>>,
}

pub fn wire_pointer_tracking(w: PointerWiring) {
    wire_pointermove(&w);
    wire_touchmove(&w);
}

fn record_sample(w: &PointerWiring, x: f32, y: f32) {
    {
        let mut p = w.pointer.borrow_mut();
        p.x = x;
        p.y = y;
    }
    // The trail throttles internally; feeding it every event is fine.
    let now_sec = js_sys::Date::now() / 1000.0;
    w.trail.borrow_mut().try_add(Vec2::new(x, y), now_sec);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        record_sample(&w, ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            record_sample(&w, touch.client_x() as f32, touch.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Taps on the big tree canvas queue rising hearts (consumed by the scene
/// surface on its next frame) and bump the visible counter.
pub fn wire_tree_taps(
    canvas: &web::HtmlCanvasElement,
    pending_taps: Rc<RefCell<Vec<Vec2>>>,
    counter_id: &'static str,
) {
    let canvas_for_closure = canvas.clone();
    let hearts_added = Rc::new(Cell::new(0usize));
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::client_to_canvas_px(
            ev.client_x() as f32,
            ev.client_y() as f32,
            &canvas_for_closure,
        );
        pending_taps.borrow_mut().push(pos);
        hearts_added.set(hearts_added.get() + CLICK_HEARTS_PER_TAP);
        if let Some(doc) = dom::window_document() {
            dom::set_text(
                &doc,
                counter_id,
                &format!("You've added {} hearts ♡", hearts_added.get()),
            );
            dom::add_class(&doc, counter_id, "heart-tree-count-visible");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
