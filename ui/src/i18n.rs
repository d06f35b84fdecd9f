//! Localized labels for `rentoora-ui`.
//!
//! Stack: `i18n-embed` picks the language and loads bundles, `fluent` formats
//! messages, `rust-embed` compiles the `.ftl` files into the binary, and
//! `i18n-embed-fl` checks every key against the fallback at compile time.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/rentoora-ui.ftl   (fallback)
//!   es-ES/rentoora-ui.ftl
//!   fr-FR/rentoora-ui.ftl
//! ```
//!
//! Components call [`init`] (idempotent) and then look labels up with `t!`:
//! ```ignore
//! crate::i18n::init();
//! let label = crate::t!("nav-services");
//! ```
//!
//! Adding a locale: copy the en-US file to `i18n/<lang-id>/rentoora-ui.ftl`,
//! translate the values, and register it in `tests/i18n_keys.rs`.
//!
//! Desktop asks the OS for preferred languages, the web build asks
//! `navigator.languages`. On WASM the `debug-embed` feature keeps assets
//! embedded in debug builds too.
//!
//! Only labels live here. Submission notices stay English constants in
//! `listing::form` / `listing::draft`.
use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a label through the shared [`LOADER`]: `t!("nav-login")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; must match the FTL file stem and the package name.
const DOMAIN: &str = "rentoora-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback language tag is valid");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!("i18n: failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// App-wide locale code provided by the launcher. Reading it subscribes the
/// calling component, so its labels refresh in place after a switch.
pub fn use_lang_code() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| FALLBACK.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_lookup_works() {
        init();
        set_language(FALLBACK).unwrap();
        assert_eq!(fl!(&*LOADER, "nav-services"), "Services");
    }

    #[test]
    fn unknown_language_keeps_labels_available() {
        init();
        let _ = set_language("zz-ZZ");
        assert!(!fl!(&*LOADER, "post-submit").is_empty());
    }

    #[test]
    fn preview_alt_interpolates_slot_number() {
        init();
        set_language(FALLBACK).unwrap();
        let alt = fl!(&*LOADER, "post-preview-alt", number = 2);
        assert!(alt.starts_with("Preview"));
        assert!(alt.contains('2'));
    }
}
