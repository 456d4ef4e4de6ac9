use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::expectation::{Expectation, HttpRequest, HttpResponse, Times};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot reach mock server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mock server rejected the command with status {status}")]
    Rejected { status: StatusCode },
    #[error("verification failed: {reason}")]
    VerificationFailed { reason: String },
}

/// Client for a running MockServer instance's remote configuration API.
///
/// Commands are JSON documents sent with PUT to the `/mockserver/*`
/// endpoints of the target instance.
#[derive(Clone)]
pub struct MockServerClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl MockServerClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Register an expectation with the server.
    pub async fn mock_any_response(&self, expectation: &Expectation) -> Result<(), Error> {
        let url = self.base_url.join("/mockserver/expectation").unwrap();
        let response = self.http_client.put(url).json(expectation).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(Error::Rejected { status }),
        }
    }

    /// Register a one-path, one-body expectation.
    pub async fn mock_simple_response(
        &self,
        path: &str,
        body: &str,
        status_code: u16,
    ) -> Result<(), Error> {
        let expectation = Expectation::new(
            HttpRequest::new().path(path),
            HttpResponse::new().status_code(status_code).body(body),
        );
        self.mock_any_response(&expectation).await
    }

    /// Drop all expectations and recorded requests on the server.
    pub async fn reset(&self) -> Result<(), Error> {
        let url = self.base_url.join("/mockserver/reset").unwrap();
        let response = self.http_client.put(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(Error::Rejected { status }),
        }
    }

    /// Drop the expectations and recorded requests matching `matcher`.
    pub async fn clear(&self, matcher: &HttpRequest) -> Result<(), Error> {
        let url = self.base_url.join("/mockserver/clear").unwrap();
        let response = self.http_client.put(url).json(matcher).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            status => Err(Error::Rejected { status }),
        }
    }

    /// Check that the server has received requests matching `matcher` the
    /// given number of times. The server answers 202 when the verification
    /// holds and 406 with a textual explanation when it does not.
    pub async fn verify(&self, matcher: &HttpRequest, times: Times) -> Result<(), Error> {
        let url = self.base_url.join("/mockserver/verify").unwrap();
        let body = Verification {
            http_request: matcher,
            times,
        };
        let response = self.http_client.put(url).json(&body).send().await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_ACCEPTABLE => Err(Error::VerificationFailed {
                reason: response.text().await.unwrap_or_default(),
            }),
            status => Err(Error::Rejected { status }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Verification<'a> {
    http_request: &'a HttpRequest,
    times: Times,
}
