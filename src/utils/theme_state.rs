use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use crate::error::LandingError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(LandingError::InvalidTheme(other.to_string())),
        }
    }
}

/// Inputs that decide which theme the page starts in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub stored: Option<Theme>,
    pub system_dark: bool,
}

impl ThemeState {
    pub fn new(stored: Option<Theme>, system_dark: bool) -> Self {
        Self { stored, system_dark }
    }

    /// An explicit choice wins over the system color scheme.
    pub fn resolve(self) -> Theme {
        self.stored.unwrap_or_else(|| Theme::from_system(self.system_dark))
    }

    pub fn has_explicit_choice(self) -> bool {
        self.stored.is_some()
    }
}
