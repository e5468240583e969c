pub mod back_to_top;
pub mod hamburger;
pub mod navbar_scroll;
pub mod reveal;
pub mod theme_toggle;
pub mod typing;

use std::fmt::{ Display, Formatter };
use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::{ Host, ListenerOptions, Scheduler };
use crate::engines::{ AnimationEngine, TypewriterEngine };
use crate::error::LandingError;
use crate::storage::KeyValueStore;
use crate::utils::Throttle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Reveal,
    NavbarScroll,
    Hamburger,
    ThemeToggle,
    BackToTop,
    Typing,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Reveal,
        Feature::NavbarScroll,
        Feature::Hamburger,
        Feature::ThemeToggle,
        Feature::BackToTop,
        Feature::Typing,
    ];
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Feature::Reveal => "Scroll animations",
            Feature::NavbarScroll => "Navbar scroll effect",
            Feature::Hamburger => "Hamburger menu",
            Feature::ThemeToggle => "Theme toggle",
            Feature::BackToTop => "Back to top button",
            Feature::Typing => "Typing effect",
        };
        f.write_str(name)
    }
}

pub struct Engines<'a> {
    pub animation: &'a dyn AnimationEngine,
    pub typewriter: &'a dyn TypewriterEngine,
}

#[derive(Debug, Default)]
pub struct StartReport {
    pub enabled: Vec<Feature>,
    pub disabled: Vec<(Feature, LandingError)>,
}

impl StartReport {
    fn record(&mut self, feature: Feature, result: Result<(), LandingError>) {
        match result {
            Ok(()) => self.enabled.push(feature),
            Err(e) => {
                log::warn!("{} disabled: {}", feature, e);
                self.disabled.push((feature, e));
            }
        }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn error_for(&self, feature: Feature) -> Option<&LandingError> {
        self.disabled.iter().find(|(f, _)| *f == feature).map(|(_, e)| e)
    }
}

/// Runs every initializer once. A failing feature is logged and skipped;
/// the others still start.
pub fn start<H: Host>(
    host: &Rc<H>,
    store: Rc<dyn KeyValueStore>,
    engines: Engines<'_>,
    config: &LandingConfig,
) -> StartReport {
    log::info!("Landing page initialized");
    let mut report = StartReport::default();

    report.record(Feature::Reveal, reveal::init(engines.animation, &config.reveal));
    report.record(Feature::NavbarScroll, navbar_scroll::init(host, config));
    report.record(Feature::Hamburger, hamburger::init(host, config));
    report.record(Feature::ThemeToggle, theme_toggle::init(host, store, config));
    report.record(Feature::BackToTop, back_to_top::init(host, config));
    report.record(
        Feature::Typing,
        typing::init(engines.typewriter, &config.selectors.typed, &config.typing),
    );

    if report.disabled.is_empty() {
        log::info!("All features loaded");
    } else {
        log::info!(
            "{} of {} features loaded",
            report.enabled.len(),
            Feature::ALL.len()
        );
    }
    report
}

pub(crate) fn require<H: Host>(host: &H, feature: Feature, selector: &str) -> Result<H::Element, LandingError> {
    host.query(selector).ok_or_else(|| LandingError::missing(feature, selector))
}

/// Strictly greater: sitting exactly on the threshold does not count.
pub fn scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub(crate) fn throttled_scroll<H: Host>(host: &Rc<H>, window_ms: u32, mut on_scroll: impl FnMut(f64) + 'static) {
    let reader = Rc::clone(host);
    let scheduler: Rc<dyn Scheduler> = Rc::clone(host) as Rc<dyn Scheduler>;
    let throttle = Throttle::new(scheduler, window_ms, move |()| on_scroll(reader.scroll_y()));
    host.on_window_scroll(ListenerOptions::PASSIVE, Box::new(move || {
        throttle.call(());
    }));
}
