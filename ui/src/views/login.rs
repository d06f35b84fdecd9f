//! Landing pages for the two login flavours. Signing in itself happens in the
//! external account service; these pages only report whether a token is present.

use dioxus::prelude::*;

use crate::core::storage;

#[component]
pub fn UserLogin() -> Element {
    rsx! {
        LoginNotice { title: crate::t!("login-user-title") }
    }
}

#[component]
pub fn ClientLogin() -> Element {
    rsx! {
        LoginNotice { title: crate::t!("login-client-title") }
    }
}

#[component]
fn LoginNotice(title: String) -> Element {
    let has_token = use_hook(|| storage::load_token().is_some());
    let lang = crate::i18n::use_lang_code();

    rsx! {
        section { class: "page page-login", lang: "{lang}",
            h1 { "{title}" }
            p { {crate::t!("login-intro")} }
            if has_token {
                p { class: "page-login__status page-login__status--ok", {crate::t!("login-token-present")} }
            } else {
                p { class: "page-login__status", {crate::t!("login-token-missing")} }
            }
        }
    }
}
