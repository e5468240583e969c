use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::error::LandingError;
use super::{ AnimationEngine, RevealConfig, TypewriterEngine, TypingConfig };

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    type Typed;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Typed, JsValue>;
}

fn to_options<T: Serialize>(config: &T) -> Result<JsValue, LandingError> {
    let json = serde_json::to_string(config)?;
    js_sys::JSON::parse(&json).map_err(|e| LandingError::Config(describe(&e)))
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Reveal-on-scroll through the global `AOS` object.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aos;

impl AnimationEngine for Aos {
    fn init(&self, config: &RevealConfig) -> Result<(), LandingError> {
        let options = to_options(config)?;
        aos_init(&options).map_err(|e| LandingError::engine("AOS", describe(&e)))
    }
}

/// Typewriter text through the global `Typed` class.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypedJs;

impl TypewriterEngine for TypedJs {
    fn init(&self, target: &str, config: &TypingConfig) -> Result<(), LandingError> {
        let options = to_options(config)?;
        // The instance drives itself from JS timers; dropping our handle is fine.
        Typed::new(target, &options)
            .map(drop)
            .map_err(|e| LandingError::engine("Typed.js", describe(&e)))
    }
}
