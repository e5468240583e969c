use crate::engines::{ AnimationEngine, RevealConfig };
use crate::error::LandingError;

pub fn init(engine: &dyn AnimationEngine, config: &RevealConfig) -> Result<(), LandingError> {
    engine.init(config)?;
    log::info!(
        "Scroll animations initialized ({}ms, offset {}px)",
        config.duration,
        config.offset
    );
    Ok(())
}
