//! Fills the static page sections from [`Config`] and wires their
//! interactions: the letter envelope, the love-note modal, per-letter
//! opening animation, scroll progress and reveal-on-scroll.

use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::config::Config;
use crate::dom;
use crate::overlay;

/// Delay before the first opening letter starts animating.
const LETTER_DELAY_BASE_SEC: f64 = 0.9;
/// Stagger between consecutive letters.
const LETTER_DELAY_STEP_SEC: f64 = 0.12;
/// Fraction of the viewport height an element must cross to reveal.
const REVEAL_VIEWPORT_FRAC: f64 = 0.85;
/// How far the opening scene must scroll past before the top button shows.
const SCROLL_TOP_SHOW_PX: f64 = -100.0;

const HEART_SVG: &str = "<svg viewBox=\"0 0 24 24\" fill=\"currentColor\" aria-hidden=\"true\">\
<path d=\"M12 21s-7.5-4.9-10-9.6C.4 8.4 2.3 5 5.7 5c2 0 3.4 1.1 4.3 2.6h4C14.9 6.1 16.3 5 18.3 5c3.4 0 5.3 3.4 3.7 6.4C19.5 16.1 12 21 12 21z\"/>\
</svg>";

/// Populate every content section. Sections whose markup is absent are
/// skipped silently, so a trimmed-down page still works.
pub fn populate(document: &web::Document, config: &Config) {
    dom::set_text(document, "openingTagline", &config.opening.tagline);
    set_letters(
        document,
        "openingMain",
        &config.opening.main_line,
        LETTER_DELAY_BASE_SEC,
    );
    let name_start = LETTER_DELAY_BASE_SEC
        + config.opening.main_line.chars().count() as f64 * LETTER_DELAY_STEP_SEC;
    set_letters(document, "openingName", &config.opening.her_name, name_start);

    populate_letter(document, &config.letter);
    populate_story(document, &config.our_story);
    populate_gallery(document, &config.gallery_images);
    populate_love_notes(document, &config.love_notes);
    populate_why_list(document, &config.why_i_love_you);

    dom::set_text(document, "finalMessage", &config.final_scene.message);
    dom::set_text(document, "btnForever", &config.final_scene.button_text);
    {
        let doc = document.clone();
        dom::add_click_listener(document, "btnForever", move || {
            if let Some(opening) = doc.get_element_by_id("sceneOpening") {
                opening.scroll_into_view();
            }
        });
    }
}

/// Split text into per-character spans with staggered animation delays.
fn set_letters(document: &web::Document, id: &str, text: &str, base_delay_sec: f64) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    el.set_inner_html("");
    for (i, ch) in text.chars().enumerate() {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        _ = span.class_list().add_1("char");
        span.set_text_content(Some(&ch.to_string()));
        let delay = base_delay_sec + i as f64 * LETTER_DELAY_STEP_SEC;
        if let Ok(span) = span.clone().dyn_into::<web::HtmlElement>() {
            _ = span
                .style()
                .set_property("animation-delay", &format!("{delay:.2}s"));
        }
        _ = el.append_child(&span);
    }
}

fn populate_letter(document: &web::Document, letter: &str) {
    dom::set_text(document, "letterInner", letter);
    {
        let doc = document.clone();
        dom::add_click_listener(document, overlay::ENVELOPE_ID, move || {
            overlay::open_modal(&doc, overlay::ENVELOPE_ID);
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "letterClose", move || {
            overlay::close_modal(&doc, overlay::ENVELOPE_ID);
        });
    }
}

fn populate_story(document: &web::Document, paragraphs: &[String]) {
    let Some(container) = document.get_element_by_id("storyCards") else {
        return;
    };
    container.set_inner_html("");
    for text in paragraphs {
        let Ok(card) = document.create_element("div") else {
            continue;
        };
        _ = card.class_list().add_1("story-card");
        if let Ok(p) = document.create_element("p") {
            p.set_text_content(Some(text));
            _ = card.append_child(&p);
        }
        _ = container.append_child(&card);
    }
}

fn populate_gallery(document: &web::Document, images: &[String]) {
    let Some(grid) = document.get_element_by_id("galleryGrid") else {
        return;
    };
    grid.set_inner_html("");
    for src in images {
        let Ok(item) = document.create_element("div") else {
            continue;
        };
        _ = item.class_list().add_1("gallery-item");
        if let Ok(img) = document.create_element("img") {
            _ = img.set_attribute("src", src);
            _ = img.set_attribute("alt", "A memory of us");
            _ = img.set_attribute("loading", "lazy");
            _ = item.append_child(&img);
        }
        _ = grid.append_child(&item);
    }
}

fn populate_love_notes(document: &web::Document, notes: &[String]) {
    let Some(container) = document.get_element_by_id("loveNotesHearts") else {
        return;
    };
    container.set_inner_html("");
    for (i, note) in notes.iter().enumerate() {
        let Ok(btn) = document.create_element("button") else {
            continue;
        };
        _ = btn.class_list().add_1("love-note-heart");
        _ = btn.set_attribute("type", "button");
        _ = btn.set_attribute("aria-label", &format!("Open love note {}", i + 1));
        btn.set_inner_html(HEART_SVG);

        let doc = document.clone();
        let note = note.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            dom::set_text(&doc, "loveNoteText", &note);
            overlay::open_modal(&doc, overlay::LOVE_NOTE_MODAL_ID);
        }) as Box<dyn FnMut()>);
        _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        _ = container.append_child(&btn);
    }

    {
        let doc = document.clone();
        dom::add_click_listener(document, "loveNoteClose", move || {
            overlay::close_modal(&doc, overlay::LOVE_NOTE_MODAL_ID);
        });
    }
    // Clicking the backdrop (the modal element itself) also closes it.
    if let Some(modal) = document.get_element_by_id(overlay::LOVE_NOTE_MODAL_ID) {
        let doc = document.clone();
        let modal_for_closure: JsValue = modal.clone().into();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(target) = ev.target() {
                let target: JsValue = target.into();
                if js_sys::Object::is(&target, &modal_for_closure) {
                    overlay::close_modal(&doc, overlay::LOVE_NOTE_MODAL_ID);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn populate_why_list(document: &web::Document, reasons: &[String]) {
    let Some(list) = document.get_element_by_id("whyList") else {
        return;
    };
    list.set_inner_html("");
    for reason in reasons {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        if let Ok(span) = document.create_element("span") {
            span.set_text_content(Some(reason));
            _ = li.append_child(&span);
        }
        _ = list.append_child(&li);
    }
}

/// Scroll-driven chrome: the progress bar, the back-to-top button and the
/// reveal-on-scroll classes. Runs once at startup so above-the-fold content
/// is revealed before the first scroll event.
pub fn setup_scroll(document: &web::Document) {
    {
        let doc = document.clone();
        dom::add_click_listener(document, "scrollToTop", move || {
            if let Some(opening) = doc.get_element_by_id("sceneOpening") {
                opening.scroll_into_view();
            }
        });
    }

    let doc = document.clone();
    let on_scroll = move || on_scroll_frame(&doc);
    on_scroll_frame(document);

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn on_scroll_frame(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let inner_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    if let Some(root) = document.document_element() {
        let total = (root.scroll_height() as f64 - inner_h).max(1.0);
        let pct = (scroll_y / total * 100.0).clamp(0.0, 100.0);
        dom::set_style(document, "scrollProgressBar", "width", &format!("{pct:.1}%"));
    }

    if let Some(opening) = document.get_element_by_id("sceneOpening") {
        let past_opening = opening.get_bounding_client_rect().bottom() < SCROLL_TOP_SHOW_PX;
        if past_opening {
            dom::add_class(document, "scrollToTop", "visible");
        } else {
            dom::remove_class(document, "scrollToTop", "visible");
        }
    }

    let threshold = inner_h * REVEAL_VIEWPORT_FRAC;
    for selector in [
        ".story-card",
        ".gallery-item",
        ".why-list li",
        ".section-title",
    ] {
        let Ok(nodes) = document.query_selector_all(selector) else {
            continue;
        };
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<web::Element>() else {
                continue;
            };
            if el.get_bounding_client_rect().top() < threshold {
                _ = el.class_list().add_1("visible");
            }
        }
    }
}
