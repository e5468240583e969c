use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, EventTarget, KeyboardEvent, MediaQueryList,
    MediaQueryListEvent, MouseEvent, ScrollBehavior, ScrollToOptions, Storage, Window,
};
use crate::error::LandingError;
use crate::engines::js::describe;
use crate::storage::KeyValueStore;
use super::{ Click, ClickHandler, Host, ListenerOptions, PageElement, Scheduler, COLOR_SCHEME_DARK_QUERY };

impl PageElement for web_sys::Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::debug!("classList.add({}) failed: {}", class, describe(&e));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::debug!("classList.remove({}) failed: {}", class, describe(&e));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(e) = self.set_attribute(name, value) {
            log::debug!("setAttribute({}) failed: {}", name, describe(&e));
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn encloses(&self, other: &Self) -> bool {
        web_sys::Node::contains(self, Some(other))
    }
}

pub struct BrowserHost {
    window: Window,
    document: Document,
    color_scheme: Option<MediaQueryList>,
}

impl BrowserHost {
    pub fn new() -> Result<Self, LandingError> {
        let window = web_sys::window().ok_or_else(|| LandingError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| LandingError::Host("no document".to_string()))?;
        let color_scheme = window.match_media(COLOR_SCHEME_DARK_QUERY).ok().flatten();
        if color_scheme.is_none() {
            log::warn!("matchMedia unavailable, assuming light color scheme");
        }

        Ok(Self { window, document, color_scheme })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn listen<T: ?Sized + WasmClosure>(target: &EventTarget, event: &str, closure: Closure<T>) {
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("Could not listen for {}: {}", event, describe(&e));
        }
        // Listeners live as long as the page.
        closure.forget();
    }

    fn listen_click(target: &EventTarget, mut handler: ClickHandler<web_sys::Element>) {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let origin = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            let click = Click::new(origin);
            handler(&click);
            if click.is_propagation_stopped() {
                event.stop_propagation();
            }
            if click.is_default_prevented() {
                event.prevent_default();
            }
        });
        Self::listen(target, "click", closure);
    }
}

impl Scheduler for BrowserHost {
    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

impl Host for BrowserHost {
    type Element = web_sys::Element;

    fn query(&self, selector: &str) -> Option<Self::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element> {
        let Ok(nodes) = root.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn document_element(&self) -> Option<Self::Element> {
        self.document.document_element()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.color_scheme.as_ref().map(|mql| mql.matches()).unwrap_or(false)
    }

    fn on_window_scroll(&self, listener: ListenerOptions, mut handler: Box<dyn FnMut()>) {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        let options = AddEventListenerOptions::new();
        options.set_passive(listener.passive);
        if let Err(e) = self.window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Could not listen for scroll: {}", describe(&e));
        }
        closure.forget();
    }

    fn on_click(&self, target: &Self::Element, handler: ClickHandler<Self::Element>) {
        Self::listen_click(target, handler);
    }

    fn on_document_click(&self, handler: ClickHandler<Self::Element>) {
        Self::listen_click(&self.document, handler);
    }

    fn on_document_keydown(&self, mut handler: Box<dyn FnMut(&str)>) {
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            handler(&event.key());
        });
        Self::listen(&self.document, "keydown", closure);
    }

    fn on_color_scheme_change(&self, mut handler: Box<dyn FnMut(bool)>) {
        let Some(mql) = self.color_scheme.as_ref() else {
            return;
        };
        let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            handler(event.matches());
        });
        Self::listen(mql, "change", closure);
    }
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new(window: &Window) -> Result<Self, LandingError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(LandingError::Storage("localStorage is not available".to_string())),
            Err(e) => Err(LandingError::Storage(describe(&e))),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| LandingError::Storage(describe(&e)))
    }
}
