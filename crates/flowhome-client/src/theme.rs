//! Light/dark theme preference, persisted alongside the session record.

use std::str::FromStr;
use std::sync::Arc;

use crate::session::{KeyValueStorage, THEME_KEY};

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Loads and persists the theme preference.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Load the stored preference. Missing or unrecognized values fall back
    /// to the default rather than erroring.
    pub fn load(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_default(),
            _ => Theme::default(),
        }
    }

    /// Persist a preference.
    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    }

    /// Flip the stored preference and return the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.load().toggled();
        self.save(next);
        next
    }
}
