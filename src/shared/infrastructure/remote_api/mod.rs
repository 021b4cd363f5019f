// HTTP client for the external workforce-management API.
//
// Purpose
// - Give the timesheet and employee adapters one configured client.
//
// Responsibilities
// - Apply the base url, the optional service bearer and a bounded timeout to every call.
// - Map transport failures into GatewayError.

use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("time-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("remote api timed out")]
    Timeout,

    #[error("remote api unreachable: {0}")]
    Transport(String),

    #[error("remote api answered with status {0}")]
    Status(u16),

    #[error("malformed remote api response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct RemoteApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteApiClient {
    pub fn new(config: &RemoteApiConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
