//! The "Will you be my Valentine?" gate. The No button dodges the pointer,
//! the Yes button grows with every dodge, and saying yes fires the confetti
//! celebration before the Enter button reveals the main world.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Celebration;
use crate::dom;

const NO_DODGE_RADIUS_PX: f64 = 140.0;
const NO_DODGE_STEP_PX: f64 = 150.0;
const YES_GROW_STEP: f64 = 0.1;
const YES_SCALE_MAX: f64 = 2.2;

fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Wire the gate if its markup is present; pages without a gate just skip it.
pub fn wire_gate(document: &web::Document, celebration: Rc<RefCell<Celebration>>) {
    let (Some(_gate), Some(main_world)) = (
        document.get_element_by_id("valentineGate"),
        document.get_element_by_id("mainWorld"),
    ) else {
        return;
    };
    _ = main_world.class_list().add_1("main-world-hidden");

    let (Some(zone), Some(yes_btn), Some(no_btn)) = (
        html_by_id(document, "gateZone"),
        html_by_id(document, "gateYesBtn"),
        html_by_id(document, "gateNoBtn"),
    ) else {
        return;
    };

    let yes_scale = Rc::new(Cell::new(1.0_f64));

    // Dodge the pointer whenever it gets close to the No button.
    {
        let zone_for_move = zone.clone();
        let yes_for_move = yes_btn.clone();
        let no_for_move = no_btn.clone();
        let yes_scale = yes_scale.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::PointerEvent| {
                let b = no_for_move.get_bounding_client_rect();
                let bx = b.left() + b.width() / 2.0;
                let by = b.top() + b.height() / 2.0;
                let px = ev.client_x() as f64;
                let py = ev.client_y() as f64;
                let dist = ((bx - px).powi(2) + (by - py).powi(2)).sqrt();
                if dist >= NO_DODGE_RADIUS_PX {
                    return;
                }

                let z = zone_for_move.get_bounding_client_rect();
                let mag = dist.max(1.0);
                let dx = (bx - px) / mag;
                let dy = (by - py) / mag;
                let new_left = ((b.left() - z.left()) + dx * NO_DODGE_STEP_PX)
                    .clamp(0.0, (z.width() - b.width()).max(0.0));
                let new_top = ((b.top() - z.top()) + dy * NO_DODGE_STEP_PX)
                    .clamp(0.0, (z.height() - b.height()).max(0.0));
                let style = no_for_move.style();
                _ = style.set_property("left", &format!("{new_left:.0}px"));
                _ = style.set_property("top", &format!("{new_top:.0}px"));
                _ = style.set_property("transform", "none");

                let scale = (yes_scale.get() + YES_GROW_STEP).min(YES_SCALE_MAX);
                yes_scale.set(scale);
                _ = yes_for_move.style().set_property(
                    "transform",
                    &format!("translateY(-50%) scale({scale:.2})"),
                );
            },
        ) as Box<dyn FnMut(_)>);
        _ = zone.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // The No button never accepts the click.
    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = no_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Yes: swap the question for the result panel and celebrate.
    {
        let doc = document.clone();
        dom::add_click_listener(document, "gateYesBtn", move || {
            dom::set_style(&doc, "gateZone", "display", "none");
            dom::set_style(&doc, "gateHint", "display", "none");
            dom::add_class(&doc, "gateResult", "is-visible");
            celebration.borrow_mut().start();
            log::info!("gate: yes");
        });
    }

    // Enter: hide the gate, show the main world.
    {
        let doc = document.clone();
        dom::add_click_listener(document, "gateEnterBtn", move || {
            dom::add_class(&doc, "valentineGate", "gate-hidden");
            dom::remove_class(&doc, "mainWorld", "main-world-hidden");
            dom::add_class(&doc, "mainWorld", "main-world-visible");
        });
    }
}
