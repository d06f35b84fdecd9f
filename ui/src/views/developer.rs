use dioxus::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Developer() -> Element {
    let lang = crate::i18n::use_lang_code();

    rsx! {
        section { class: "page page-developer", lang: "{lang}",
            h1 { {crate::t!("developer-title")} }
            p { {crate::t!("developer-intro")} }
            p { class: "page-developer__version", "rentoora-ui v{VERSION}" }
        }
    }
}
