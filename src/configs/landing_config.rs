use serde::{ Deserialize, Serialize };
use crate::dom::{ Host, PageElement };
use crate::engines::{ RevealConfig, TypingConfig };
use crate::error::LandingError;
use crate::utils::DEFAULT_THROTTLE_MS;

/// Optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_SELECTOR: &str = "#landing-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub header: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub theme_toggle: String,
    pub dark_icon: String,
    pub light_icon: String,
    pub to_top: String,
    pub typed: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "header".to_string(),
            hamburger: "#hamburger".to_string(),
            nav_menu: "#nav-menu".to_string(),
            nav_links: "a".to_string(),
            theme_toggle: "#theme-toggle".to_string(),
            dark_icon: "#theme-toggle-dark-icon".to_string(),
            light_icon: "#theme-toggle-light-icon".to_string(),
            to_top: "#to-top".to_string(),
            typed: "#typed".to_string(),
        }
    }
}

impl Selectors {
    fn all(&self) -> [(&'static str, &str); 9] {
        [
            ("header", &self.header),
            ("hamburger", &self.hamburger),
            ("navMenu", &self.nav_menu),
            ("navLinks", &self.nav_links),
            ("themeToggle", &self.theme_toggle),
            ("darkIcon", &self.dark_icon),
            ("lightIcon", &self.light_icon),
            ("toTop", &self.to_top),
            ("typed", &self.typed),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Scroll offset in px past which the navbar and back-to-top react.
    pub scroll_threshold: f64,
    pub throttle_ms: u32,
    pub theme_key: String,
    pub selectors: Selectors,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            throttle_ms: DEFAULT_THROTTLE_MS,
            theme_key: "theme".to_string(),
            selectors: Selectors::default(),
            reveal: RevealConfig::default(),
            typing: TypingConfig::default(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, LandingError> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LandingError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(LandingError::Config(format!(
                "scrollThreshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.throttle_ms == 0 {
            return Err(LandingError::Config("throttleMs must be greater than zero".to_string()));
        }
        if self.theme_key.trim().is_empty() {
            return Err(LandingError::Config("themeKey must not be empty".to_string()));
        }
        if let Some((name, _)) = self.selectors.all().iter().find(|(_, sel)| sel.trim().is_empty()) {
            return Err(LandingError::Config(format!("selectors.{} must not be empty", name)));
        }
        if self.typing.strings.is_empty() {
            return Err(LandingError::Config("typing.strings must not be empty".to_string()));
        }
        if self.typing.show_cursor && self.typing.cursor_char.is_empty() {
            return Err(LandingError::Config("typing.cursorChar must not be empty".to_string()));
        }
        Ok(())
    }

    /// Defaults, overridden by the page's inline config element when present.
    pub fn load<H: Host>(host: &H) -> Self {
        let Some(raw) = host.query(CONFIG_ELEMENT_SELECTOR).and_then(|el| el.text()) else {
            log::debug!("No inline config found, using defaults");
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                log::info!("Loaded landing config from {}", CONFIG_ELEMENT_SELECTOR);
                config
            }
            Err(e) => {
                log::warn!("Ignoring inline config: {}", e);
                Self::default()
            }
        }
    }
}
