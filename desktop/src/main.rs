#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::{NavBar, ToastHost};
use ui::views::{ClientLogin, CreatePost, Developer, Home, UserLogin};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

// Shared theme, always embedded so packaged builds need no stylesheet on disk.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Rentoora – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1100.0, 820.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
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

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
    rsx! {
        NavBar {}
        main { class: "app-main", Outlet::<Route> {} }
    }
}
