#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the shared components emit remain present in
  ui/assets/theme/main.css, so a refactor cannot silently drop styling from
  packaged (embedded) desktop builds.
- Ensure every custom property `Theme::css_variables()` writes is actually read
  by the stylesheet, and vice versa for the palette block.

Extending:
- Add new selectors to REQUIRED_SELECTORS when a component gains structural CSS.
*/

use ui::core::Theme;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors emitted by `ui` components.
const REQUIRED_SELECTORS: &[&str] = &[
    // Shell
    ":root",
    "body {",
    ".storyboard {",
    ".storyboard__error",
    ".navbar__link--active",
    ".device {",
    // Chrome
    ".screen {",
    ".screen__content",
    ".status-bar {",
    ".tab-bar {",
    ".tab-bar__item--selected",
    "[data-inert]",
    // Controls
    ".button--primary",
    ".button--ghost",
    ".chip--selected",
    ".text-field__input",
    ".remote-image--placeholder",
    // Cards
    ".post-item__image",
    ".product-card {",
    ".category-item__image",
    ".promo-banner {",
    ".booking-card__image",
    ".stat-card {",
    ".chat-row__badge",
    ".order-total--grand",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_theme_variable_is_consumed() {
    let vars = Theme::default().css_variables();
    for declaration in vars.split(';').map(str::trim).filter(|d| !d.is_empty()) {
        let name = declaration.split(':').next().unwrap_or_default().trim();
        assert!(
            THEME_CSS.contains(&format!("var({name})")),
            "`{name}` is set by Theme::css_variables but never read by the stylesheet"
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}
