//! HTTP transport
//!
//! [`HttpClient`] is the seam between the resource fetcher and the network.
//! [`BasicAuthClient`] is the real implementation: a ureq agent that signs
//! every request with HTTP Basic credentials.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::ApiError;

const USER_AGENT: &str = concat!("lptools/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests and returns the response body
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<String, ApiError>;
}

/// Blocking client with HTTP Basic authentication
///
/// Single-shot: no retries and no timeout beyond ureq's defaults.
pub struct BasicAuthClient {
    agent: ureq::Agent,
    authorization: String,
    verbose: bool,
}

impl BasicAuthClient {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
            authorization: basic_authorization(username, password),
            verbose: false,
        }
    }

    /// Logs every request URL to stderr before sending it
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl HttpClient for BasicAuthClient {
    fn get(&self, url: &str) -> Result<String, ApiError> {
        if self.verbose {
            eprintln!("[verbose:http] GET {}", url);
        }

        let response = self
            .agent
            .get(url)
            .set("Authorization", &self.authorization)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => ApiError::from_status(url, status),
                ureq::Error::Transport(transport) => ApiError::Network {
                    url: url.to_string(),
                    message: transport.to_string(),
                },
            })?;

        response.into_string().map_err(|e| ApiError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Builds the `Authorization` header value for Basic auth
pub fn basic_authorization(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}
