use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheezeWizardsError {
    #[error("API request failed: {0}")]
    ApiRequestError(#[source] reqwest::Error),
    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Failed to decode response body (status {status}): {source}. Body: {body}")]
    HttpJsonDecode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl CheezeWizardsError {
    /// HTTP status of the response that produced this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::HttpJsonDecode { status, .. } => {
                Some(*status)
            }
            Self::ApiRequestError(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) | Self::ClientBuild(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_carries_status_and_body() {
        let error = CheezeWizardsError::UnexpectedStatus {
            status: 404,
            body: String::from("wizard not found"),
        };

        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Unexpected response status 404: wizard not found"
        );
    }

    #[test]
    fn decode_error_keeps_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CheezeWizardsError::HttpJsonDecode {
            status: 200,
            body: String::from("{"),
            source,
        };

        assert_eq!(error.status(), Some(200));
        assert!(!error.is_not_found());
    }

    #[test]
    fn invalid_url_has_no_status() {
        let error = CheezeWizardsError::InvalidUrl(String::from("not a url"));
        assert_eq!(error.status(), None);
    }
}
