use std::future::Future;

use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};

use crate::{ApiConfig, ApiError, ListingPayload};

/// Something that can deliver a listing to the server.
pub trait ListingTransport {
    /// POST `payload`, attaching `token` as a bearer credential when present.
    fn create_post(
        &self,
        payload: ListingPayload,
        token: Option<String>,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed transport used by the web and desktop builds.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder
            .build()
            .map_err(|err| ApiError::Client(err.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl ListingTransport for HttpTransport {
    async fn create_post(
        &self,
        payload: ListingPayload,
        token: Option<String>,
    ) -> Result<(), ApiError> {
        let url = self.config.posts_url();
        let image_count = payload.images().len();
        debug!(%url, image_count, "posting listing");

        let mut request = self.client.post(&url).multipart(payload.into_form()?);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|err| {
            warn!(%url, error = %err, "listing request failed");
            ApiError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "listing rejected by server");
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
