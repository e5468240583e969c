pub mod theme_state;
pub mod throttle;

pub use theme_state::{ Theme, ThemeState };
pub use throttle::{ Throttle, DEFAULT_THROTTLE_MS };
