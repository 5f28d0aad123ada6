//! Error types shared across the UI crate.
//!
//! Each concern gets its own enum so callers only match on failures they can
//! actually hit. Image loading failures are not represented here: they are
//! absorbed by `components::RemoteImage`, which renders a placeholder.

use thiserror::Error;

/// Failure to resolve a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The requested name is not one of the seven known screens.
    #[error("unknown screen `{0}`")]
    UnknownScreen(String),
}

/// Failure to build a [`crate::core::Theme`].
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A colour token could not be read as `#RRGGBB`, `#AARRGGBB` or `0xAARRGGBB`.
    #[error("invalid color `{token}`: {reason}")]
    InvalidColor { token: String, reason: &'static str },

    /// The theme document is not valid TOML or does not match the schema.
    #[error("theme parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure to read a money literal such as `$329.98`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("invalid amount `{0}`")]
    Invalid(String),
}

/// Failure to load a [`crate::core::Catalog`] from an external document.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_error_names_the_target() {
        let err = RoutingError::UnknownScreen("settings".into());
        assert_eq!(err.to_string(), "unknown screen `settings`");
    }

    #[test]
    fn invalid_color_mentions_token() {
        let err = ThemeError::InvalidColor {
            token: "0xFF5O4QQQ".into(),
            reason: "non-hex digit",
        };
        assert!(err.to_string().contains("0xFF5O4QQQ"));
    }
}
