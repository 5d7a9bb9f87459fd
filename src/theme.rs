use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's stored theme preference. `System` defers to the platform's
/// color-scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// The concrete light/dark value after applying any `System` preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => {
                if prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl ResolvedTheme {
    /// The class applied to the document element.
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> ResolvedTheme {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

impl From<ResolvedTheme> for Theme {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Light => Theme::Light,
            ResolvedTheme::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_resolves_by_preference() {
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_explicit_themes_ignore_preference() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("system".parse::<Theme>(), Ok(Theme::System));
        assert!("solarized".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn test_flipping_resolved_theme() {
        assert_eq!(ResolvedTheme::Light.flipped(), ResolvedTheme::Dark);
        assert_eq!(ResolvedTheme::Dark.flipped(), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_writes_explicit_theme() {
        // Flipping from a resolved value replaces a stored System preference
        // with an explicit one
        let stored = Theme::System;
        let resolved = stored.resolve(true);
        let next: Theme = resolved.flipped().into();
        assert_eq!(next, Theme::Light);
    }
}
