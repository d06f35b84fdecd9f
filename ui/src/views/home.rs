use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let lang = crate::i18n::use_lang_code();
    dioxus::logger::tracing::debug!(%lang, "home render");

    rsx! {
        section { class: "page page-home", lang: "{lang}",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-direct")} }
                li { {crate::t!("home-feature-photos")} }
                li { {crate::t!("home-feature-types")} }
            }
            Link { class: "button button--primary page-home__cta", to: "/post",
                {crate::t!("home-cta")}
            }
        }
    }
}
