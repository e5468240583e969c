//! Third-party widget libraries the page hands configuration to.

#[cfg(target_arch = "wasm32")]
pub mod js;

use serde::{ Deserialize, Serialize };
use crate::error::LandingError;

pub trait AnimationEngine {
    fn init(&self, config: &RevealConfig) -> Result<(), LandingError>;
}

pub trait TypewriterEngine {
    fn init(&self, target: &str, config: &TypingConfig) -> Result<(), LandingError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBack,
}

/// Which edge of the element has to cross which edge of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPlacement {
    TopBottom,
    TopCenter,
    TopTop,
    CenterBottom,
    CenterCenter,
    BottomBottom,
}

/// Options object for `AOS.init`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
    pub easing: Easing,
    pub delay: u32,
    pub anchor_placement: AnchorPlacement,
    pub mirror: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: 1000,
            once: true,
            offset: 120,
            easing: Easing::EaseOutCubic,
            delay: 0,
            anchor_placement: AnchorPlacement::TopBottom,
            mirror: false,
        }
    }
}

/// Options object for `new Typed(selector, options)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub strings: Vec<String>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub show_cursor: bool,
    pub cursor_char: String,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            strings: vec![
                "a Thinker".to_string(),
                "Frontend Developer".to_string(),
                "Tech Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
            type_speed: 100,
            back_speed: 50,
            back_delay: 2000,
            looped: true,
            show_cursor: true,
            cursor_char: "|".to_string(),
        }
    }
}
