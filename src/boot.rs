use std::rc::Rc;
use crate::configs::LandingConfig;
use crate::dom::browser::{ BrowserHost, LocalStore };
use crate::engines::js::{ Aos, TypedJs };
use crate::features::{ self, Engines, StartReport };
use crate::storage::{ KeyValueStore, MemoryStore };

/// Binds every page behavior against the live document.
pub fn start_in_browser() -> Option<StartReport> {
    let host = match BrowserHost::new() {
        Ok(host) => Rc::new(host),
        Err(e) => {
            log::error!("Landing page not started: {}", e);
            return None;
        }
    };

    let config = LandingConfig::load(&*host);

    let store: Rc<dyn KeyValueStore> = match LocalStore::new(host.window()) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("{}; theme choice will not survive a reload", e);
            Rc::new(MemoryStore::new())
        }
    };

    let engines = Engines {
        animation: &Aos,
        typewriter: &TypedJs,
    };
    Some(features::start(&host, store, engines, &config))
}
