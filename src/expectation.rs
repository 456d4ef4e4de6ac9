use std::collections::BTreeMap;

use serde::Serialize;

/// An expectation, as MockServer's configuration API understands it: match
/// incoming requests against `http_request`, answer them with
/// `http_response`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expectation {
    http_request: HttpRequest,
    http_response: HttpResponse,
}

impl Expectation {
    pub fn new(http_request: HttpRequest, http_response: HttpResponse) -> Self {
        Self {
            http_request,
            http_response,
        }
    }
}

/// Request matcher. Fields left unset are omitted from the JSON; the server
/// treats absent fields as wildcards.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl HttpRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Response template. Header values are lists, per the wire format.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookies: Option<BTreeMap<String, String>>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// How many matching requests `verify` should have seen.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Times {
    #[serde(skip_serializing_if = "Option::is_none")]
    at_least: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    at_most: Option<u64>,
}

impl Times {
    pub fn exactly(count: u64) -> Self {
        Self {
            at_least: Some(count),
            at_most: Some(count),
        }
    }

    pub fn at_least(count: u64) -> Self {
        Self {
            at_least: Some(count),
            at_most: None,
        }
    }

    pub fn at_most(count: u64) -> Self {
        Self {
            at_least: None,
            at_most: Some(count),
        }
    }
}
