use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Where a navbar action leads. Platform crates declare routes with the
/// same paths, so the bar can navigate without knowing their `Route` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDestination {
    Home,
    Developer,
    UserLogin,
    ClientLogin,
}

impl NavDestination {
    pub fn path(self) -> &'static str {
        match self {
            NavDestination::Home => "/",
            NavDestination::Developer => "/developer",
            NavDestination::UserLogin => "/login-user",
            NavDestination::ClientLogin => "/client-login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginVariant {
    User,
    Client,
}

impl LoginVariant {
    pub fn destination(self) -> NavDestination {
        match self {
            LoginVariant::User => NavDestination::UserLogin,
            LoginVariant::Client => NavDestination::ClientLogin,
        }
    }
}

/// Drawer (small screens) and login dropdown visibility. Both start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub drawer_open: bool,
    pub dropdown_open: bool,
}

impl NavState {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Pick a login flavour: the dropdown closes and its page is returned.
    pub fn select_login(&mut self, variant: LoginVariant) -> NavDestination {
        self.dropdown_open = false;
        self.go(variant.destination())
    }

    /// Any navigation also folds the drawer away.
    pub fn go(&mut self, destination: NavDestination) -> NavDestination {
        self.drawer_open = false;
        destination
    }
}

/// Locale shown by the switcher on mount: the app-wide choice if there is one.
fn initial_language(shared: Option<String>) -> String {
    shared
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| "en-US".to_string())
}

fn navigate_to(mut nav: Signal<NavState>, destination: NavDestination) {
    let destination = nav.with_mut(|state| state.go(destination));
    navigator().push(destination.path());
}

fn choose_login(mut nav: Signal<NavState>, variant: LoginVariant) {
    let destination = nav.with_mut(|state| state.select_login(variant));
    navigator().push(destination.path());
}

#[component]
pub fn NavBar() -> Element {
    i18n::init();

    let mut nav = use_signal(NavState::default);
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang =
        use_signal(|| initial_language(lang_code_ctx.as_ref().map(|c| c.peek().clone())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_language = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let NavState {
        drawer_open,
        dropdown_open,
    } = nav();

    let services = t!("nav-services");
    let about = t!("nav-about");
    let developer = t!("nav-developer");
    let login = t!("nav-login");
    let login_user = t!("nav-login-user");
    let login_client = t!("nav-login-client");
    let menu_label = if drawer_open {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            // Hidden marker ensures NavBar re-renders when the global language signal changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    onclick: move |_| navigate_to(nav, NavDestination::Home),
                    span { class: "navbar__brand-mark",
                        "RENT"
                        span { class: "navbar__brand-accent", "OO" }
                        "RA"
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                ul { class: "navbar__links",
                    li { class: "navbar__link", "{services}" }
                    li { class: "navbar__link", "{about}" }
                    li {
                        class: "navbar__link",
                        onclick: move |_| navigate_to(nav, NavDestination::Developer),
                        "{developer}"
                    }
                    li {
                        class: "navbar__login",
                        onclick: move |_| nav.with_mut(NavState::toggle_dropdown),
                        "{login}"
                        if dropdown_open {
                            ul { class: "navbar__dropdown",
                                li {
                                    class: "navbar__dropdown-item",
                                    onclick: move |evt| {
                                        evt.stop_propagation();
                                        choose_login(nav, LoginVariant::User);
                                    },
                                    "{login_user}"
                                }
                                li {
                                    class: "navbar__dropdown-item",
                                    onclick: move |evt| {
                                        evt.stop_propagation();
                                        choose_login(nav, LoginVariant::Client);
                                    },
                                    "{login_client}"
                                }
                            }
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_language,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: "{menu_label}",
                    aria_expanded: "{drawer_open}",
                    onclick: move |_| nav.with_mut(NavState::toggle_drawer),
                    if drawer_open { "✕" } else { "☰" }
                }
            }
        }

        div {
            class: if drawer_open { "navbar__backdrop navbar__backdrop--open" } else { "navbar__backdrop" },
            onclick: move |_| nav.with_mut(NavState::close_drawer),
        }

        aside {
            class: if drawer_open { "navbar__drawer navbar__drawer--open" } else { "navbar__drawer" },
            div { class: "navbar__drawer-header",
                button {
                    r#type: "button",
                    class: "navbar__brand-mark",
                    onclick: move |_| navigate_to(nav, NavDestination::Home),
                    "RENT"
                    span { class: "navbar__brand-accent", "OO" }
                    "RA"
                }
                button {
                    r#type: "button",
                    class: "navbar__drawer-close",
                    aria_label: "{menu_label}",
                    onclick: move |_| nav.with_mut(NavState::close_drawer),
                    "✕"
                }
            }
            ul { class: "navbar__drawer-links",
                li { class: "navbar__drawer-link", "{services}" }
                li { class: "navbar__drawer-link", "{about}" }
                li {
                    class: "navbar__drawer-link",
                    onclick: move |_| navigate_to(nav, NavDestination::Developer),
                    "{developer}"
                }
                li {
                    class: "navbar__drawer-link navbar__login",
                    onclick: move |_| nav.with_mut(NavState::toggle_dropdown),
                    "{login}"
                    if dropdown_open {
                        ul { class: "navbar__dropdown",
                            li {
                                class: "navbar__dropdown-item",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    choose_login(nav, LoginVariant::User);
                                },
                                "{login_user}"
                            }
                            li {
                                class: "navbar__dropdown-item",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    choose_login(nav, LoginVariant::Client);
                                },
                                "{login_client}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_closed() {
        let state = NavState::default();
        assert!(!state.drawer_open);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn drawer_toggle_twice_returns_to_closed() {
        let mut state = NavState::default();
        state.toggle_drawer();
        assert!(state.drawer_open);
        state.toggle_drawer();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = NavState::default();
        state.toggle_dropdown();
        assert!(state.dropdown_open);
        assert!(!state.drawer_open);
    }

    #[test]
    fn selecting_a_login_variant_closes_dropdown_and_routes() {
        let mut state = NavState::default();
        state.toggle_dropdown();
        assert_eq!(
            state.select_login(LoginVariant::User).path(),
            "/login-user"
        );
        assert!(!state.dropdown_open);

        state.toggle_dropdown();
        assert_eq!(
            state.select_login(LoginVariant::Client).path(),
            "/client-login"
        );
        assert!(!state.dropdown_open);
    }

    #[test]
    fn navigating_from_the_drawer_closes_it() {
        let mut state = NavState::default();
        state.toggle_drawer();
        state.toggle_dropdown();
        assert_eq!(state.select_login(LoginVariant::User), NavDestination::UserLogin);
        assert_eq!(state, NavState::default());

        state.toggle_drawer();
        assert_eq!(state.go(NavDestination::Developer).path(), "/developer");
        assert!(!state.drawer_open);
    }

    #[test]
    fn destinations_map_to_router_paths() {
        assert_eq!(NavDestination::Home.path(), "/");
        assert_eq!(NavDestination::Developer.path(), "/developer");
        assert_eq!(NavDestination::UserLogin.path(), "/login-user");
        assert_eq!(NavDestination::ClientLogin.path(), "/client-login");
    }

    #[test]
    fn switcher_starts_on_the_shared_locale() {
        assert_eq!(initial_language(Some("fr-FR".into())), "fr-FR");
        assert_eq!(initial_language(Some(String::new())), "en-US");
        assert_eq!(initial_language(None), "en-US");
    }
}
