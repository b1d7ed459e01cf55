//! Modal and reveal helpers: class toggling plus `aria-hidden` so open
//! state stays consistent between CSS and assistive tech.

use web_sys as web;

pub const LOVE_NOTE_MODAL_ID: &str = "loveNoteModal";
pub const ENVELOPE_ID: &str = "envelopeWrap";

#[inline]
pub fn open_modal(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("open");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn close_modal(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("open");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_open(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains("open"))
        .unwrap_or(false)
}

/// Close anything Escape should dismiss.
pub fn close_all(document: &web::Document) {
    if is_open(document, LOVE_NOTE_MODAL_ID) {
        close_modal(document, LOVE_NOTE_MODAL_ID);
    }
    if is_open(document, ENVELOPE_ID) {
        close_modal(document, ENVELOPE_ID);
    }
}
