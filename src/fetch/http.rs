// src/fetch/http.rs
// =============================================================================
// This module makes the GET requests for the page and its assets.
//
// Key functionality:
// - One GET per call, no retries, no backoff
// - Non-2xx responses become an error whose text names the status code
//   ("Request failed with status code 404"), which is what ends up on the
//   user's terminal
// - Bodies come back as raw bytes so images survive untouched
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::HttpOptions;

/// How the response body should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// Decode using the charset from Content-Type, stored as UTF-8
    Text,
    /// Keep the bytes exactly as received
    Binary,
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as a string; invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

/// Why a GET failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// No usable response (DNS, connection, TLS, body read, ...)
    #[error("{message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport {
            message: error.to_string(),
        }
    }
}

/// Retry-free GET capability used by the mirror pipeline.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url, mode: BodyMode) -> Result<HttpResponse, FetchError>;
}

/// HttpClient backed by a shared reqwest connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(options: &HttpOptions) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(5));

        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url, mode: BodyMode) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = match mode {
            BodyMode::Text => response.text().await?.into_bytes(),
            BodyMode::Binary => response.bytes().await?.to_vec(),
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
