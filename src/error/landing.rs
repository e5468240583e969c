use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum LandingError {
    MissingElement {
        feature: String,
        selector: String,
    },
    Engine {
        engine: String,
        message: String,
    },
    InvalidTheme(String),
    Storage(String),
    Config(String),
    Host(String),
}

impl LandingError {
    pub fn missing(feature: impl Display, selector: &str) -> Self {
        LandingError::MissingElement {
            feature: feature.to_string(),
            selector: selector.to_string(),
        }
    }

    pub fn engine(engine: &str, message: impl Into<String>) -> Self {
        LandingError::Engine {
            engine: engine.to_string(),
            message: message.into(),
        }
    }

    pub fn is_missing_element(&self) -> bool {
        matches!(self, LandingError::MissingElement { .. })
    }
}

impl Display for LandingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LandingError::MissingElement { feature, selector } => {
                write!(f, "{} element not found: {}", feature, selector)
            }
            LandingError::Engine { engine, message } => {
                write!(f, "{} failed to start: {}", engine, message)
            }
            LandingError::InvalidTheme(value) => write!(f, "Invalid theme value: {:?}", value),
            LandingError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            LandingError::Config(msg) => write!(f, "Config Error: {}", msg),
            LandingError::Host(msg) => write!(f, "Host Error: {}", msg),
        }
    }
}

impl std::error::Error for LandingError {}

impl From<serde_json::Error> for LandingError {
    fn from(error: serde_json::Error) -> Self {
        LandingError::Config(error.to_string())
    }
}
