mod landing_config;

pub use landing_config::{ LandingConfig, Selectors, CONFIG_ELEMENT_SELECTOR };
