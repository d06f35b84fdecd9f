use dioxus::prelude::*;

use ui::components::{NavBar, ToastHost};
use ui::views::{ClientLogin, CreatePost, Developer, Home, UserLogin};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/post")]
    CreatePost {},
    #[route("/developer")]
    Developer {},
    #[route("/login-user")]
    UserLogin {},
    #[route("/client-login")]
    ClientLogin {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // NavBar writes the chosen locale here; views read it to re-render.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        ToastHost {
            Router::<Route> {}
        }
    }
}

/// Shared `NavBar` above the web `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        NavBar {}
        main { class: "app-main", Outlet::<Route> {} }
    }
}
