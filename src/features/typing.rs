use crate::engines::{ TypewriterEngine, TypingConfig };
use crate::error::LandingError;

pub fn init(engine: &dyn TypewriterEngine, target: &str, config: &TypingConfig) -> Result<(), LandingError> {
    engine.init(target, config)?;
    log::info!("Typing effect initialized with {} strings", config.strings.len());
    Ok(())
}
