use std::fmt::Display;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{APPLICATION_JSON, Body, Error};

/// JSON payload of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub title: String,
}

/// Fetch-shaped result of a request. Built once and handed to the caller.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Body>,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self { status, headers: HeaderMap::new(), body: None }
    }

    /// Response whose body is `{"title": message}` served as JSON.
    pub fn error(status: StatusCode, message: impl Display) -> Self {
        let payload = ErrorBody { title: message.to_string() };
        // A single string field always serializes.
        let payload = serde_json::to_string(&payload).unwrap_or_default();

        Self::new(status)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .with_body(Body::from(payload))
    }

    pub fn from_error(error: &Error) -> Self {
        Self::error(error.status(), error)
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn status_text(&self) -> Option<&'static str> {
        status_text(self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, `None` when missing or not visible ASCII.
    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The body, when the response has one. `text`/`json` live on [`Body`].
    pub fn body(&mut self) -> Option<&mut Body> {
        self.body.as_mut()
    }

    pub fn into_body(self) -> Option<Body> {
        self.body
    }
}

/// Fixed reason phrases. Codes outside the table have none.
pub fn status_text(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::OK => Some("OK"),
        StatusCode::CREATED => Some("Created"),
        StatusCode::BAD_REQUEST => Some("Bad Request"),
        StatusCode::NOT_FOUND => Some("Not Found"),
        StatusCode::METHOD_NOT_ALLOWED => Some("Method Not Allowed"),
        StatusCode::NOT_ACCEPTABLE => Some("Not Acceptable"),
        StatusCode::INTERNAL_SERVER_ERROR => Some("Internal Server Error"),
        _ => None,
    }
}
