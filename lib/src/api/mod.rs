//! Access to the platform's REST API.
//!
//! [`ApiClient`] wraps a `reqwest` client, the API base address and an
//! optional bearer token. Remote services for likes and comments build their
//! requests through it.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::Config;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: Url, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: with_trailing_slash(base),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout))
            .user_agent(format!("{}/{}", config.name, config.version))
            .build()?;
        Ok(Self {
            http,
            base: with_trailing_slash(config.api.base_url.clone()),
            token: config.api.token.clone(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Joins a relative path such as `sites/1/comments` onto the base.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Sends the request and decodes a JSON body, turning non-success
    /// statuses into `RemoteError`.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// `Url::join` replaces the last path segment unless it ends with a slash,
/// so `.../rest/v1.1` would lose its version.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(ErrorKind::RemoteError {
        status: status.as_u16(),
        message,
    }
    .into())
}

/// Error body returned by the platform, e.g.
/// `{"error": "unknown_post", "message": "Unknown post"}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base() {
        let client = ApiClient::new(
            Url::parse("https://public-api.wordpress.com/rest/v1.1/").unwrap(),
            None,
        );
        assert_eq!(
            client.url("/sites/12/posts/42/likes").unwrap().as_str(),
            "https://public-api.wordpress.com/rest/v1.1/sites/12/posts/42/likes"
        );
    }

    #[test]
    fn base_without_trailing_slash_keeps_last_segment() {
        let client = ApiClient::new(
            Url::parse("https://public-api.wordpress.com/rest/v1.1").unwrap(),
            None,
        );
        assert_eq!(
            client.base().as_str(),
            "https://public-api.wordpress.com/rest/v1.1/"
        );
        assert_eq!(
            client.url("sites/12/comments").unwrap().as_str(),
            "https://public-api.wordpress.com/rest/v1.1/sites/12/comments"
        );
    }

    #[test]
    fn config_base_gets_normalized() {
        let mut config = Config::default();
        config.api.base_url = Url::parse("http://localhost:8080/api").unwrap();
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(
            client.url("/sites/1/posts/2/likes").unwrap().as_str(),
            "http://localhost:8080/api/sites/1/posts/2/likes"
        );
    }

    #[test]
    fn config_carries_token_and_base() {
        let mut config = Config::default();
        config.api.token = Some("secret".to_string());
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base(), &config.api.base_url);
        assert_eq!(client.token.as_deref(), Some("secret"));
    }
}
