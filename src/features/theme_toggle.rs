use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::{ Click, Host, PageElement };
use crate::error::LandingError;
use crate::storage::KeyValueStore;
use crate::utils::{ Theme, ThemeState };
use super::{ require, Feature };

pub const DARK_CLASS: &str = "dark";
pub const HIDDEN_CLASS: &str = "hidden";

pub struct ThemeToggle<E> {
    root: E,
    dark_icon: E,
    light_icon: E,
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl<E: PageElement> ThemeToggle<E> {
    pub fn new(root: E, dark_icon: E, light_icon: E, store: Rc<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            root,
            dark_icon,
            light_icon,
            store,
            key: key.to_string(),
        }
    }

    /// The persisted choice. Anything other than "light"/"dark" is ignored.
    pub fn stored(&self) -> Option<Theme> {
        let raw = self.store.get(&self.key)?;
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme under {:?}: {}", self.key, e);
                None
            }
        }
    }

    pub fn state(&self, system_dark: bool) -> ThemeState {
        ThemeState::new(self.stored(), system_dark)
    }

    pub fn current(&self, system_dark: bool) -> Theme {
        self.state(system_dark).resolve()
    }

    /// Root class plus icons. The icon shown is the one that switches away
    /// from the active theme.
    pub fn apply(&self, theme: Theme) {
        let dark = theme.is_dark();
        self.root.set_class(DARK_CLASS, dark);
        self.light_icon.set_class(HIDDEN_CLASS, !dark);
        self.dark_icon.set_class(HIDDEN_CLASS, dark);
    }

    pub fn persist(&self, theme: Theme) {
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("Could not save theme: {}", e);
        }
    }

    pub fn toggle(&self, system_dark: bool) -> Theme {
        let next = self.current(system_dark).toggled();
        self.apply(next);
        self.persist(next);
        log::info!("Theme switched to: {}", next);
        next
    }

    /// Follows the system only until the user has picked a theme.
    pub fn follow_system(&self, system_dark: bool) -> bool {
        if self.state(system_dark).has_explicit_choice() {
            return false;
        }
        self.apply(Theme::from_system(system_dark));
        true
    }
}

pub fn init<H: Host>(host: &Rc<H>, store: Rc<dyn KeyValueStore>, config: &LandingConfig) -> Result<(), LandingError> {
    let selectors = &config.selectors;
    let button = require(&**host, Feature::ThemeToggle, &selectors.theme_toggle)?;
    let dark_icon = require(&**host, Feature::ThemeToggle, &selectors.dark_icon)?;
    let light_icon = require(&**host, Feature::ThemeToggle, &selectors.light_icon)?;
    let root = host
        .document_element()
        .ok_or_else(|| LandingError::missing(Feature::ThemeToggle, "html"))?;

    let toggle = Rc::new(ThemeToggle::new(root, dark_icon, light_icon, store, &config.theme_key));
    let initial = toggle.current(host.prefers_dark_scheme());
    toggle.apply(initial);

    let on_click = Rc::clone(&toggle);
    let system = Rc::clone(host);
    host.on_click(&button, Box::new(move |_: &Click<H::Element>| {
        on_click.toggle(system.prefers_dark_scheme());
    }));

    let on_change = Rc::clone(&toggle);
    host.on_color_scheme_change(Box::new(move |prefers_dark: bool| {
        if on_change.follow_system(prefers_dark) {
            log::debug!("Theme follows system: {}", Theme::from_system(prefers_dark));
        }
    }));

    log::info!("Dark mode initialized ({})", initial);
    Ok(())
}
