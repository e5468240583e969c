use std::cell::{ Cell, RefCell };
use std::collections::{ BTreeMap, BTreeSet, HashMap };
use std::fmt::{ Debug, Formatter };
use std::rc::Rc;
use crate::dom::{ Click, ClickHandler, Host, ListenerOptions, PageElement, Scheduler };
use crate::engines::{ AnimationEngine, RevealConfig, TypewriterEngine, TypingConfig };
use crate::error::LandingError;

struct FakeNode {
    tag: String,
    classes: RefCell<BTreeSet<String>>,
    attrs: RefCell<BTreeMap<String, String>>,
    text: RefCell<Option<String>>,
    parent: Option<FakeElement>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<FakeNode>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self::build(tag, None)
    }

    fn build(tag: &str, parent: Option<FakeElement>) -> Self {
        FakeElement(Rc::new(FakeNode {
            tag: tag.to_string(),
            classes: RefCell::new(BTreeSet::new()),
            attrs: RefCell::new(BTreeMap::new()),
            text: RefCell::new(None),
            parent,
        }))
    }

    pub fn child(&self, tag: &str) -> Self {
        Self::build(tag, Some(self.clone()))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        *self.0.text.borrow_mut() = Some(text.to_string());
        self
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().iter().cloned().collect()
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.0.parent.clone();
        while let Some(node) = current {
            depth += 1;
            current = node.0.parent.clone();
        }
        depth
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for FakeElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} class={:?}>", self.0.tag, self.classes())
    }
}

impl PageElement for FakeElement {
    fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.attrs.borrow_mut().insert(name.to_string(), value.to_string());
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.attrs.borrow().get(name).cloned()
    }

    fn text(&self) -> Option<String> {
        self.0.text.borrow().clone()
    }

    fn encloses(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.0.parent.clone();
        }
        false
    }
}

/// In-memory page with a manual clock. Events are dispatched by hand.
#[derive(Default)]
pub struct FakeHost {
    by_selector: RefCell<HashMap<String, FakeElement>>,
    elements: RefCell<Vec<FakeElement>>,
    root: RefCell<Option<FakeElement>>,
    scroll_y: Cell<f64>,
    prefers_dark: Cell<bool>,
    scrolls_to_top: Cell<u32>,
    now: Cell<u64>,
    timers: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
    scroll_listeners: RefCell<Vec<(ListenerOptions, Box<dyn FnMut()>)>>,
    click_listeners: RefCell<Vec<(FakeElement, ClickHandler<FakeElement>)>>,
    document_clicks: RefCell<Vec<ClickHandler<FakeElement>>>,
    keydowns: RefCell<Vec<Box<dyn FnMut(&str)>>>,
    scheme_listeners: RefCell<Vec<Box<dyn FnMut(bool)>>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Every element the landing page expects, in their initial state.
    pub fn landing_page() -> Rc<Self> {
        let host = Self::new();
        let html = FakeElement::new("html");
        *host.root.borrow_mut() = Some(html.clone());
        let body = html.child("body");

        let header = body.child("header");
        host.insert("header", header.clone());

        let hamburger = header.child("button");
        host.insert("#hamburger", hamburger.clone());
        host.register(hamburger.child("span"));

        let menu = header.child("nav").with_class("hidden");
        host.insert("#nav-menu", menu.clone());
        let list = menu.child("ul");
        for _ in 0..4 {
            host.register(list.child("li").child("a"));
        }
        host.register(menu.child("p"));

        let toggle = header.child("button");
        host.insert("#theme-toggle", toggle.clone());
        host.insert("#theme-toggle-dark-icon", toggle.child("svg").with_class("hidden"));
        host.insert("#theme-toggle-light-icon", toggle.child("svg").with_class("hidden"));

        let main = body.child("main");
        host.insert("#typed", main.child("span"));
        host.insert("#to-top", body.child("a").with_class("hidden"));
        host.register(main.child("p"));

        host
    }

    pub fn insert(&self, selector: &str, element: FakeElement) {
        self.register(element.clone());
        self.by_selector.borrow_mut().insert(selector.to_string(), element);
    }

    pub fn register(&self, element: FakeElement) {
        self.elements.borrow_mut().push(element);
    }

    pub fn remove(&self, selector: &str) {
        self.by_selector.borrow_mut().remove(selector);
    }

    pub fn remove_root(&self) {
        self.root.borrow_mut().take();
    }

    pub fn element(&self, selector: &str) -> FakeElement {
        self.by_selector
            .borrow()
            .get(selector)
            .cloned()
            .unwrap_or_else(|| panic!("no element for {}", selector))
    }

    pub fn root(&self) -> FakeElement {
        self.root.borrow().clone().expect("page has no root element")
    }

    /// Descendants of `root` with the given tag, in insertion order.
    pub fn find_all(&self, root: &FakeElement, tag: &str) -> Vec<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|el| el.tag() == tag && el != &root && root.encloses(el))
            .cloned()
            .collect()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn advance(&self, ms: u64) {
        self.advance_to(self.now.get() + ms);
    }

    pub fn advance_to(&self, target: u64) {
        loop {
            let due = {
                let mut timers = self.timers.borrow_mut();
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(idx, _)| idx);
                next.map(|idx| timers.remove(idx))
            };
            match due {
                Some((at, callback)) => {
                    self.now.set(at);
                    callback();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn scroll_to(&self, offset: f64) {
        self.scroll_y.set(offset);
        for (_, listener) in self.scroll_listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    /// Dispatches a bubbling click. Returns whether the default action was prevented.
    pub fn click(&self, target: &FakeElement) -> bool {
        let click = Click::new(Some(target.clone()));
        {
            let mut listeners = self.click_listeners.borrow_mut();
            let mut order: Vec<usize> = listeners
                .iter()
                .enumerate()
                .filter(|(_, (el, _))| el.encloses(target))
                .map(|(idx, _)| idx)
                .collect();
            order.sort_by_key(|idx| std::cmp::Reverse(listeners[*idx].0.depth()));

            let mut current_depth = None;
            for idx in order {
                let depth = listeners[idx].0.depth();
                if click.is_propagation_stopped() && current_depth != Some(depth) {
                    break;
                }
                current_depth = Some(depth);
                (listeners[idx].1)(&click);
            }
        }

        if !click.is_propagation_stopped() {
            for listener in self.document_clicks.borrow_mut().iter_mut() {
                listener(&click);
            }
        }
        click.is_default_prevented()
    }

    /// A click on the document itself, with no element target.
    pub fn click_document(&self) {
        let click = Click::new(None);
        for listener in self.document_clicks.borrow_mut().iter_mut() {
            listener(&click);
        }
    }

    pub fn press_key(&self, key: &str) {
        for listener in self.keydowns.borrow_mut().iter_mut() {
            listener(key);
        }
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    pub fn change_color_scheme(&self, dark: bool) {
        self.prefers_dark.set(dark);
        for listener in self.scheme_listeners.borrow_mut().iter_mut() {
            listener(dark);
        }
    }

    pub fn scrolls_to_top(&self) -> u32 {
        self.scrolls_to_top.get()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.borrow().len()
    }

    pub fn passive_scroll_listener_count(&self) -> usize {
        self.scroll_listeners.borrow().iter().filter(|(options, _)| options.passive).count()
    }

    pub fn click_listener_count(&self, target: &FakeElement) -> usize {
        self.click_listeners.borrow().iter().filter(|(el, _)| el == target).count()
    }

    pub fn document_click_count(&self) -> usize {
        self.document_clicks.borrow().len()
    }

    pub fn keydown_count(&self) -> usize {
        self.keydowns.borrow().len()
    }

    pub fn scheme_listener_count(&self) -> usize {
        self.scheme_listeners.borrow().len()
    }
}

impl Scheduler for FakeHost {
    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let at = self.now.get() + u64::from(delay_ms);
        self.timers.borrow_mut().push((at, callback));
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.by_selector.borrow().get(selector).cloned()
    }

    fn query_within(&self, root: &FakeElement, selector: &str) -> Vec<FakeElement> {
        self.find_all(root, selector)
    }

    fn document_element(&self) -> Option<FakeElement> {
        self.root.borrow().clone()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to_top(&self) {
        self.scrolls_to_top.set(self.scrolls_to_top.get() + 1);
        self.scroll_y.set(0.0);
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark.get()
    }

    fn on_window_scroll(&self, options: ListenerOptions, handler: Box<dyn FnMut()>) {
        self.scroll_listeners.borrow_mut().push((options, handler));
    }

    fn on_click(&self, target: &FakeElement, handler: ClickHandler<FakeElement>) {
        self.click_listeners.borrow_mut().push((target.clone(), handler));
    }

    fn on_document_click(&self, handler: ClickHandler<FakeElement>) {
        self.document_clicks.borrow_mut().push(handler);
    }

    fn on_document_keydown(&self, handler: Box<dyn FnMut(&str)>) {
        self.keydowns.borrow_mut().push(handler);
    }

    fn on_color_scheme_change(&self, handler: Box<dyn FnMut(bool)>) {
        self.scheme_listeners.borrow_mut().push(handler);
    }
}

#[derive(Default)]
pub struct RecordingAnimation {
    pub configs: RefCell<Vec<RevealConfig>>,
    pub fail: bool,
}

impl RecordingAnimation {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl AnimationEngine for RecordingAnimation {
    fn init(&self, config: &RevealConfig) -> Result<(), LandingError> {
        if self.fail {
            return Err(LandingError::engine("AOS", "AOS is not defined"));
        }
        self.configs.borrow_mut().push(config.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingTypewriter {
    pub calls: RefCell<Vec<(String, TypingConfig)>>,
    pub fail: bool,
}

impl RecordingTypewriter {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl TypewriterEngine for RecordingTypewriter {
    fn init(&self, target: &str, config: &TypingConfig) -> Result<(), LandingError> {
        if self.fail {
            return Err(LandingError::engine("Typed.js", "Typed is not a constructor"));
        }
        self.calls.borrow_mut().push((target.to_string(), config.clone()));
        Ok(())
    }
}
