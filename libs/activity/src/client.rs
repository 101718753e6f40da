use reqwest::{
    header::{HeaderMap, HeaderValue},
    ClientBuilder, StatusCode,
};
use toml::{map::Map, Value};
use tracing::{error, info};

use crate::{response::IntoResponse, ActivityError};

pub static DEFAULT_BASE_URL: &str = "https://api.github.com";
pub static DEFAULT_USER_AGENT: &str = "github-activity";

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ActivityError> {
        Self::with_builder(base_url, user_agent, ClientBuilder::new())
    }

    /// Reads `base_url` and `user_agent` from the `[github]` table, falling
    /// back to the public API defaults for anything left out.
    pub fn from_config(
        config: &Map<String, Value>,
    ) -> Result<Self, ActivityError> {
        let github = config.get("github");

        let base_url = match github.and_then(|github| github.get("base_url")) {
            Some(value) => value
                .as_str()
                .into_response("failed to parse base_url config")?,
            None => DEFAULT_BASE_URL,
        };

        let user_agent =
            match github.and_then(|github| github.get("user_agent")) {
                Some(value) => value
                    .as_str()
                    .into_response("failed to parse user_agent config")?,
                None => DEFAULT_USER_AGENT,
            };

        Self::new(base_url, user_agent)
    }

    pub(crate) fn with_builder(
        base_url: &str,
        user_agent: &str,
        builder: ClientBuilder,
    ) -> Result<Self, ActivityError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "User-Agent",
            HeaderValue::from_str(user_agent)
                .into_response("invalid user_agent")?,
        );

        let http = builder
            .default_headers(headers)
            .build()
            .into_response("failed to build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET for `path` and returns the full body of a `200 OK`
    /// response. The response is consumed before returning on every path.
    pub async fn get(&self, path: &str) -> Result<String, ActivityError> {
        let url = format!("{}/{}", self.base_url, path);
        info!(task = "get", url = url.as_str());

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .into_response("failed to send")?;

        let status = response.status();

        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            error!(
                task = "get",
                url = url.as_str(),
                status = status.to_string(),
                body = text.as_str(),
            );
            return Err(ActivityError::FailedStatusCode {
                status_code: status,
                message: text,
            });
        }

        response.text().await.into_response("failed to read body")
    }
}
