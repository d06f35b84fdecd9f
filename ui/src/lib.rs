//! Shared UI crate for Rentoora. Components and views used by the web and
//! desktop launchers live here.

pub mod core;
pub mod i18n;
pub mod listing;
pub mod views;

pub mod components {
    // Responsive navigation bar with login chooser (components/nav_bar.rs)
    pub mod nav_bar;
    pub use nav_bar::NavBar;

    // Toast notifications (components/toast.rs)
    pub mod toast;
    pub use toast::ToastHost;
}
