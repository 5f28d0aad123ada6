//! Theme configuration: the colour palette every screen is painted with.
//!
//! A [`Theme`] is an ordinary value. `AppShell` receives one as a prop and
//! renders it as CSS custom properties on the shell root; two shells (a preview
//! and a test, say) never share palette state.
//!
//! # TOML Format
//!
//! ```toml
//! name = "figma-light"
//!
//! [colors]
//! background = "#FFFFFF"
//! text_primary = "#000000"
//! text_secondary = "#828282"
//! accent = "#FE2C55"
//! border = "#E6E6E6"
//! surface_muted = "#F7F7F7"
//! search_fill = "#F5F5F5"
//! card_brand = "#1A1F71"
//! on_accent = "#FFFFFF"
//! # promo_banner = "#5040A0"   (optional, falls back to `accent`)
//! ```
//!
//! Colour tokens may be written `#RRGGBB`, `#AARRGGBB` or `0xAARRGGBB`; the
//! alpha byte is discarded.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

const BUNDLED_THEME: &str = include_str!("../../assets/theme/figma.toml");

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB`, `#AARRGGBB`, `0xAARRGGBB` (or the bare digits).
    pub fn from_hex(token: &str) -> Result<Self, ThemeError> {
        let invalid = |reason| ThemeError::InvalidColor {
            token: token.to_string(),
            reason,
        };

        let trimmed = token.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex digit"));
        }
        let rgb = match digits.len() {
            6 => digits,
            8 => &digits[2..],
            _ => return Err(invalid("expected 6 or 8 hex digits")),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&rgb[range], 16).map_err(|_| invalid("non-hex digit"))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub accent: Rgb,
    pub border: Rgb,
    /// Avatar and category tile fill.
    pub surface_muted: Rgb,
    /// Search field fill on the listing screen.
    pub search_fill: Rgb,
    /// Payment card badge.
    pub card_brand: Rgb,
    /// Text drawn on top of `accent` fills.
    pub on_accent: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_banner: Option<Rgb>,
}

impl Theme {
    /// The theme shipped in `assets/theme/figma.toml`.
    pub fn bundled() -> Result<Self, ThemeError> {
        Self::from_toml_str(BUNDLED_THEME)
    }

    /// [`Theme::bundled`], falling back to [`Theme::default`] if the file is unreadable.
    pub fn load() -> Self {
        match Self::bundled() {
            Ok(theme) => {
                tracing::info!(theme = %theme.name, "theme loaded");
                theme
            }
            Err(err) => {
                tracing::warn!(%err, "bundled theme rejected; using built-in palette");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = toml::from_str(source)?;
        if theme.colors.promo_banner.is_none() {
            tracing::debug!(theme = %theme.name, "no promo_banner colour; using accent");
        }
        Ok(theme)
    }

    pub fn promo_banner(&self) -> Rgb {
        self.colors.promo_banner.unwrap_or(self.colors.accent)
    }

    /// Inline `style` declarations consumed by `assets/theme/main.css`.
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        [
            ("--color-bg", c.background),
            ("--color-text", c.text_primary),
            ("--color-text-muted", c.text_secondary),
            ("--color-accent", c.accent),
            ("--color-border", c.border),
            ("--color-surface-muted", c.surface_muted),
            ("--color-search-fill", c.search_fill),
            ("--color-card-brand", c.card_brand),
            ("--color-on-accent", c.on_accent),
            ("--color-promo", self.promo_banner()),
        ]
        .iter()
        .map(|(name, color)| format!("{name}: {color};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "figma-light".to_string(),
            colors: ThemeColors {
                background: Rgb::WHITE,
                text_primary: Rgb::BLACK,
                text_secondary: Rgb::new(0x82, 0x82, 0x82),
                accent: Rgb::new(0xFE, 0x2C, 0x55),
                border: Rgb::new(0xE6, 0xE6, 0xE6),
                surface_muted: Rgb::new(0xF7, 0xF7, 0xF7),
                search_fill: Rgb::new(0xF5, 0xF5, 0xF5),
                card_brand: Rgb::new(0x1A, 0x1F, 0x71),
                on_accent: Rgb::WHITE,
                promo_banner: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_token_forms() {
        let accent = Rgb::new(0xFE, 0x2C, 0x55);
        assert_eq!(Rgb::from_hex("#FE2C55").unwrap(), accent);
        assert_eq!(Rgb::from_hex("#fffe2c55").unwrap(), accent);
        assert_eq!(Rgb::from_hex("0xFFFE2C55").unwrap(), accent);
        assert_eq!(Rgb::from_hex("FE2C55").unwrap(), accent);
    }

    #[test]
    fn rejects_malformed_export_token() {
        // Promo banner token from the design export.
        let err = Rgb::from_hex("0xFF5O4QQQ").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { reason: "non-hex digit", .. }));
        assert!(Rgb::from_hex("#FFF").is_err());
    }

    #[test]
    fn bundled_theme_matches_default() {
        assert_eq!(Theme::bundled().unwrap(), Theme::default());
    }

    #[test]
    fn malformed_color_fails_theme_parse() {
        let source = BUNDLED_THEME.replace("[colors]", "[colors]\npromo_banner = \"0xFF5O4QQQ\"");
        let err = Theme::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().contains("0xFF5O4QQQ"));
    }

    #[test]
    fn promo_banner_falls_back_to_accent() {
        let mut theme = Theme::default();
        assert_eq!(theme.promo_banner(), theme.colors.accent);
        theme.colors.promo_banner = Some(Rgb::new(0x50, 0x40, 0xA0));
        assert!(theme.css_variables().contains("--color-promo: #5040A0;"));
    }

    #[test]
    fn css_variables_cover_palette() {
        let vars = Theme::default().css_variables();
        assert!(vars.contains("--color-bg: #FFFFFF;"));
        assert!(vars.contains("--color-accent: #FE2C55;"));
        assert!(vars.contains("--color-promo: #FE2C55;"));
    }
}
