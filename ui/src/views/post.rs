use dioxus::prelude::*;

use crate::listing::PostForm;

#[component]
pub fn CreatePost() -> Element {
    let lang = crate::i18n::use_lang_code();

    rsx! {
        section { class: "page page-post", lang: "{lang}",
            h1 { {crate::t!("post-title")} }
            PostForm {}
        }
    }
}
