//! Background music toggle. Audio starts muted; browsers refuse autoplay
//! anyway, so the first click is the first play attempt.

use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::config::MusicConfig;
use crate::dom;

pub fn wire_music(document: &web::Document, config: &MusicConfig) {
    if !config.enabled || config.src.is_empty() {
        dom::set_style(document, "musicToggle", "display", "none");
        return;
    }
    let Ok(audio) = web::HtmlAudioElement::new_with_src(&config.src) else {
        log::warn!("music: could not create audio element for {}", config.src);
        dom::set_style(document, "musicToggle", "display", "none");
        return;
    };
    audio.set_loop(true);

    dom::add_class(document, "musicToggle", "muted");
    let playing = Rc::new(Cell::new(false));
    let doc = document.clone();
    dom::add_click_listener(document, "musicToggle", move || {
        if playing.get() {
            audio.pause().ok();
            dom::add_class(&doc, "musicToggle", "muted");
            playing.set(false);
        } else {
            // play() returns a promise; rejection just leaves us muted.
            _ = audio.play();
            dom::remove_class(&doc, "musicToggle", "muted");
            playing.set(true);
        }
    });
}
