use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay;

/// Escape dismisses whichever modal is open.
pub fn wire_global_keydown(document: &web::Document) {
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            overlay::close_all(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
