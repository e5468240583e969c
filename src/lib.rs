mod views;
mod routes;
pub mod configs;
pub mod dom;
pub mod engines;
pub mod error;
pub mod features;
pub mod storage;
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod boot;

pub use crate::routes::*;
pub use crate::configs::LandingConfig;
pub use crate::error::LandingError;
pub use crate::features::{ start, Engines, Feature, StartReport };
