use std::sync::Arc;

use derive_setters::Setters;
use ffetch_domain::{
    Body, ContentType, Error, Method, OCTET_STREAM, RequestBody, ResolvedReference, Response,
};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use tracing::{debug, warn};

use crate::{FileInfoInfra, FileReaderInfra, FileWriterInfra};

/// Method-specific inputs of a single dispatch.
#[derive(Debug, Default, Setters)]
#[setters(into, strip_option)]
pub struct DispatchOptions {
    /// Request body, only used by PUT.
    pub body: Option<RequestBody>,
    /// Overrides the extension based `content-type` of GET and HEAD.
    pub content_type: Option<ContentType>,
}

/// Performs the filesystem operation behind a method and answers with a
/// [`Response`]. Failures are reported through the response status, never as
/// an `Err`.
pub struct FetchDispatcher<F> {
    infra: Arc<F>,
}

impl<F> Clone for FetchDispatcher<F> {
    fn clone(&self) -> Self {
        Self { infra: self.infra.clone() }
    }
}

impl<F: FileInfoInfra + FileReaderInfra + FileWriterInfra> FetchDispatcher<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }

    pub async fn dispatch(
        &self,
        path: &ResolvedReference,
        method: &Method,
        options: DispatchOptions,
    ) -> Response {
        let DispatchOptions { body, content_type } = options;

        let response = match method {
            Method::Get => self.get(path, content_type.as_ref()).await,
            Method::Head => self.head(path, content_type.as_ref()).await,
            Method::Put => self.put(path, body).await,
            Method::Other(other) => Response::from_error(&Error::UnsupportedMethod(other.clone())),
        };

        debug!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "Dispatched request"
        );

        response
    }

    async fn get(&self, path: &ResolvedReference, content_type: Option<&ContentType>) -> Response {
        let size = self.infra.file_size(path).await;

        let stream = match self.infra.open_read(path).await {
            Ok(stream) => stream,
            Err(error) => {
                debug!(path = %path, error = %format!("{error:#}"), "File is not readable");
                return Response::from_error(&Error::NotFound);
            }
        };

        let mut headers = content_headers(path, content_type);
        if let Some(size) = size {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(size));
        }

        Response::new(StatusCode::OK)
            .with_headers(headers)
            .with_body(Body::new(stream))
    }

    async fn head(&self, path: &ResolvedReference, content_type: Option<&ContentType>) -> Response {
        if !self.infra.is_readable(path).await {
            return Response::from_error(&Error::NotFound);
        }

        Response::new(StatusCode::OK).with_headers(content_headers(path, content_type))
    }

    async fn put(&self, path: &ResolvedReference, body: Option<RequestBody>) -> Response {
        let Some(body) = body else {
            return Response::from_error(&Error::MissingBody);
        };

        match self.infra.write_stream(path, body.into_stream()).await {
            Ok(()) => Response::new(StatusCode::CREATED),
            Err(error) => {
                let error = Error::Write(format!("{error:#}"));
                warn!(path = %path, error = %error, "Failed to write file");
                Response::from_error(&error)
            }
        }
    }
}

fn content_headers(path: &ResolvedReference, content_type: Option<&ContentType>) -> HeaderMap {
    let value = ContentType::resolve(content_type, path.extension());
    let value = HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static(OCTET_STREAM));

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, value);
    headers
}
