//! Static page configuration, read once at startup from the
//! `window.VALENTINE_CONFIG` global. Missing or malformed config falls back
//! to placeholder defaults so the page always renders.

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys as web;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningConfig {
    pub tagline: String,
    pub main_line: String,
    pub her_name: String,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            tagline: "for you".to_string(),
            main_line: "Will you be my Valentine,".to_string(),
            her_name: "Valentine".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalConfig {
    pub message: String,
    pub button_text: String,
}

impl Default for FinalConfig {
    fn default() -> Self {
        Self {
            message: "Happy Valentine's Day".to_string(),
            button_text: "Back to the start".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicConfig {
    pub enabled: bool,
    pub src: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub opening: OpeningConfig,
    pub letter: String,
    pub our_story: Vec<String>,
    pub gallery_images: Vec<String>,
    pub love_notes: Vec<String>,
    pub why_i_love_you: Vec<String>,
    #[serde(rename = "final")]
    pub final_scene: FinalConfig,
    pub music: MusicConfig,
}

pub fn load() -> Config {
    let Some(window) = web::window() else {
        return Config::default();
    };
    match js_sys::Reflect::get(&window, &JsValue::from_str("VALENTINE_CONFIG")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => match v.into_serde() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("config: malformed VALENTINE_CONFIG, using defaults: {e}");
                Config::default()
            }
        },
        _ => {
            log::warn!("config: VALENTINE_CONFIG missing, using defaults");
            Config::default()
        }
    }
}
