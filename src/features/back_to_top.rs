use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::{ Click, Host, PageElement };
use crate::error::LandingError;
use super::{ require, scrolled_past, throttled_scroll, Feature };

pub const HIDDEN_CLASS: &str = "hidden";
pub const SHOWN_CLASS: &str = "flex";

pub fn apply<E: PageElement>(button: &E, offset: f64, threshold: f64) {
    let visible = scrolled_past(offset, threshold);
    button.set_class(HIDDEN_CLASS, !visible);
    button.set_class(SHOWN_CLASS, visible);
}

pub fn init<H: Host>(host: &Rc<H>, config: &LandingConfig) -> Result<(), LandingError> {
    let button = require(&**host, Feature::BackToTop, &config.selectors.to_top)?;
    let threshold = config.scroll_threshold;

    let watched = button.clone();
    throttled_scroll(host, config.throttle_ms, move |offset| apply(&watched, offset, threshold));

    let scroller = Rc::clone(host);
    host.on_click(&button, Box::new(move |click: &Click<H::Element>| {
        click.prevent_default();
        scroller.scroll_to_top();
    }));

    log::info!("Back to top button initialized");
    Ok(())
}
