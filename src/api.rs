use reqwest::{Client, StatusCode, Url};

use crate::config::CheezeWizardsConfig;
use crate::error::CheezeWizardsError;

pub(crate) const API_TOKEN_HEADER: &str = "x-api-token";
pub(crate) const EMAIL_HEADER: &str = "x-email";

#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    api_key: String,
    email: String,
    http_client: Client,
}

impl ApiClient {
    pub(crate) fn new(
        base_url: String,
        api_key: String,
        email: String,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            email,
            http_client,
        }
    }

    pub(crate) fn from_config(config: &CheezeWizardsConfig) -> Result<Self, CheezeWizardsError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(CheezeWizardsError::ClientBuild)?;

        Ok(Self::new(
            config.base_url().to_string(),
            config.api_key.clone(),
            config.email.clone(),
            http_client,
        ))
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL and appends `query` in order. No `?` is emitted
    /// when `query` is empty.
    pub(crate) fn url(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Url, CheezeWizardsError> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url =
            Url::parse(&raw).map_err(|e| CheezeWizardsError::InvalidUrl(format!("{raw}: {e}")))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    pub(crate) async fn get<T>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, CheezeWizardsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "sending request");

        let response = self
            .http_client
            .get(url)
            .header(API_TOKEN_HEADER, &self.api_key)
            .header(EMAIL_HEADER, &self.email)
            .send()
            .await
            .map_err(CheezeWizardsError::ApiRequestError)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(CheezeWizardsError::ApiRequestError)?;

        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), path, "unexpected response status");
            return Err(CheezeWizardsError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        serde_json::from_str::<T>(&body).map_err(|e| CheezeWizardsError::HttpJsonDecode {
            status: status.as_u16(),
            body,
            source: e,
        })
    }
}
