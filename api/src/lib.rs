//! REST client for the Rentoora listing server.
//!
//! The UI crate never talks to `reqwest` directly: it builds a
//! [`ListingPayload`] and hands it to a [`ListingTransport`]. The production
//! transport is [`HttpTransport`]; tests substitute their own.

mod config;
mod error;
mod payload;
mod transport;

pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, POSTS_PATH};
pub use error::ApiError;
pub use payload::{ImagePart, ListingPayload, IMAGES_FIELD};
pub use transport::{HttpTransport, ListingTransport};
