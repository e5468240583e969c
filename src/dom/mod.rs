//! The slice of the browser the landing page talks to.
//!
//! Features are written against [`Host`] and [`PageElement`] so they can be
//! driven by `web-sys` in the browser and by an in-memory page in tests.

#[cfg(target_arch = "wasm32")]
pub mod browser;

use std::cell::Cell;

pub const COLOR_SCHEME_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const ESCAPE_KEY: &str = "Escape";

pub trait PageElement: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn set_attr(&self, name: &str, value: &str);
    fn attr(&self, name: &str) -> Option<String>;
    fn text(&self) -> Option<String>;
    /// True when `other` is this element or one of its descendants.
    fn encloses(&self, other: &Self) -> bool;

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// The handler never calls `preventDefault`, so the host may scroll
    /// without waiting on it.
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: ListenerOptions = ListenerOptions { passive: true };
}

/// One-shot deferred callbacks.
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// A click as seen by a handler. Handlers flag what they want done and the
/// host applies it to the real event afterwards.
pub struct Click<E> {
    target: Option<E>,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl<E> Click<E> {
    pub fn new(target: Option<E>) -> Self {
        Self {
            target,
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

pub type ClickHandler<E> = Box<dyn FnMut(&Click<E>)>;

pub trait Host: Scheduler + 'static {
    type Element: PageElement;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;
    fn document_element(&self) -> Option<Self::Element>;

    fn scroll_y(&self) -> f64;
    fn scroll_to_top(&self);
    fn prefers_dark_scheme(&self) -> bool;

    /// Scroll handlers here never cancel scrolling; callers pass
    /// [`ListenerOptions::PASSIVE`] and the browser host forwards it to
    /// `addEventListener`.
    fn on_window_scroll(&self, options: ListenerOptions, handler: Box<dyn FnMut()>);
    fn on_click(&self, target: &Self::Element, handler: ClickHandler<Self::Element>);
    fn on_document_click(&self, handler: ClickHandler<Self::Element>);
    fn on_document_keydown(&self, handler: Box<dyn FnMut(&str)>);
    fn on_color_scheme_change(&self, handler: Box<dyn FnMut(bool)>);
}
