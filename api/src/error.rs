use thiserror::Error;

/// Failure while talking to the listing server.
///
/// `Display` is what the user ends up reading after "Error creating post: ",
/// so transport errors keep their underlying message verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, timeout...).
    #[error("{0}")]
    Network(String),
    /// The server answered outside the 2xx range.
    #[error("Request failed with status code {0}")]
    Status(u16),
    /// An image part carried a MIME type the multipart encoder rejected.
    #[error("Invalid image type: {0}")]
    InvalidMime(String),
    /// The HTTP client itself could not be constructed.
    #[error("HTTP client unavailable: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_display_verbatim() {
        assert_eq!(
            ApiError::Network("Network Error".into()).to_string(),
            "Network Error"
        );
    }

    #[test]
    fn status_errors_name_the_code() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Request failed with status code 500"
        );
    }
}
