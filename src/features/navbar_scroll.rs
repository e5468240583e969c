use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::{ Host, PageElement };
use crate::error::LandingError;
use super::{ require, scrolled_past, throttled_scroll, Feature };

pub const FIXED_CLASS: &str = "navbar-fixed";

pub fn apply<E: PageElement>(header: &E, offset: f64, threshold: f64) {
    header.set_class(FIXED_CLASS, scrolled_past(offset, threshold));
}

pub fn init<H: Host>(host: &Rc<H>, config: &LandingConfig) -> Result<(), LandingError> {
    let header = require(&**host, Feature::NavbarScroll, &config.selectors.header)?;
    let threshold = config.scroll_threshold;

    throttled_scroll(host, config.throttle_ms, move |offset| apply(&header, offset, threshold));

    log::info!("Navbar scroll effect initialized");
    Ok(())
}
