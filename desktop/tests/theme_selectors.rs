#![cfg(test)]
//! The desktop binary embeds `ui/assets/theme/main.css` and never loads it
//! from disk, so a renamed selector only shows up as broken styling at
//! runtime. These checks catch that at test time instead.
//!
//! When a component's class names change, update the markup and this list together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    ".button--warning",
    // PostForm
    ".post-form__fields",
    ".post-form__field",
    ".post-form__input",
    ".post-form__slots",
    ".post-form__dropzone",
    ".post-form__preview",
    ".post-form__upload-hint",
    ".post-form__hint",
    ".post-form__submit",
    ".post-form__message--error",
    ".post-form__message--success",
    // Toasts
    ".toast-stack",
    ".toast {",
    ".toast--success",
    ".toast--error",
    // Pages
    ".page-home__features",
    ".page-login__status",
    ".page-developer__version",
    "@media (max-width: 720px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar",
    ".navbar__links",
    ".navbar__login",
    ".navbar__dropdown",
    ".navbar__dropdown-item",
    ".navbar__toggle",
    ".navbar__backdrop--open",
    ".navbar__drawer--open",
    ".navbar__drawer-links",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selectors in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selectors in ui/assets/styling/navbar.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
