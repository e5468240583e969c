use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::{ Click, Host, PageElement, ESCAPE_KEY };
use crate::error::LandingError;
use super::{ require, Feature };

pub const ACTIVE_CLASS: &str = "hamburger-active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const EXPANDED_ATTR: &str = "aria-expanded";

/// Mobile menu state, kept only in the DOM: the panel's `hidden` class,
/// the toggle's active class and its `aria-expanded` attribute.
pub struct MenuToggle<E> {
    hamburger: E,
    menu: E,
}

impl<E: PageElement> MenuToggle<E> {
    pub fn new(hamburger: E, menu: E) -> Self {
        Self { hamburger, menu }
    }

    pub fn is_open(&self) -> bool {
        !self.menu.has_class(HIDDEN_CLASS)
    }

    pub fn set_open(&self, open: bool) {
        self.hamburger.set_class(ACTIVE_CLASS, open);
        self.menu.set_class(HIDDEN_CLASS, !open);
        self.hamburger.set_attr(EXPANDED_ATTR, if open { "true" } else { "false" });
    }

    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.set_open(open);
        log::debug!("Menu {}", if open { "opened" } else { "closed" });
        open
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    /// A click with no element target counts as outside.
    pub fn is_outside(&self, target: Option<&E>) -> bool {
        match target {
            Some(el) => !self.menu.encloses(el) && !self.hamburger.encloses(el),
            None => true,
        }
    }
}

pub fn init<H: Host>(host: &Rc<H>, config: &LandingConfig) -> Result<(), LandingError> {
    let hamburger = require(&**host, Feature::Hamburger, &config.selectors.hamburger)?;
    let menu = require(&**host, Feature::Hamburger, &config.selectors.nav_menu)?;
    let links = host.query_within(&menu, &config.selectors.nav_links);

    let toggle = Rc::new(MenuToggle::new(hamburger.clone(), menu));
    toggle.close();

    let on_hamburger = Rc::clone(&toggle);
    host.on_click(&hamburger, Box::new(move |click: &Click<H::Element>| {
        click.stop_propagation();
        on_hamburger.toggle();
    }));

    for link in &links {
        let on_link = Rc::clone(&toggle);
        host.on_click(link, Box::new(move |_: &Click<H::Element>| on_link.close()));
    }

    let on_document = Rc::clone(&toggle);
    host.on_document_click(Box::new(move |click: &Click<H::Element>| {
        if on_document.is_outside(click.target()) {
            on_document.close();
        }
    }));

    let on_key = Rc::clone(&toggle);
    host.on_document_keydown(Box::new(move |key: &str| {
        if key == ESCAPE_KEY {
            on_key.close();
        }
    }));

    log::info!("Hamburger menu initialized with {} links", links.len());
    Ok(())
}
