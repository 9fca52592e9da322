use std::sync::Arc;

use ffetch_app::{
    DispatchOptions, FetchDispatcher, FileInfoInfra, FileReaderInfra, FileWriterInfra,
};
use ffetch_domain::{Identifier, Response, Result};
use ffetch_infra::FetchInfra;
use tracing::debug;

use crate::{FetchConfig, RequestOptions};

/// Fetch-shaped access to local files.
///
/// A `Fetch` carries the defaults of [`FetchConfig`]; every call to
/// [`Fetch::request`] resolves its identifier against them and dispatches the
/// method onto the filesystem.
pub struct Fetch<F = FetchInfra> {
    config: FetchConfig,
    dispatcher: FetchDispatcher<F>,
}

impl Fetch<FetchInfra> {
    pub fn new(config: FetchConfig) -> Self {
        Self::with_infra(config, Arc::new(FetchInfra::new()))
    }
}

impl Default for Fetch<FetchInfra> {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl<F> Clone for Fetch<F> {
    fn clone(&self) -> Self {
        Self { config: self.config.clone(), dispatcher: self.dispatcher.clone() }
    }
}

impl<F: FileInfoInfra + FileReaderInfra + FileWriterInfra> Fetch<F> {
    pub fn with_infra(config: FetchConfig, infra: Arc<F>) -> Self {
        Self { config, dispatcher: FetchDispatcher::new(infra) }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Performs one request.
    ///
    /// Only identifier resolution can fail, and it does so before any file is
    /// touched. Filesystem failures come back as a non-2xx [`Response`].
    pub async fn request(
        &self,
        identifier: impl AsRef<str>,
        options: RequestOptions,
    ) -> Result<Response> {
        let RequestOptions { method, body, content_type, base } = options;

        let base = base.as_ref().unwrap_or(&self.config.base);
        let path = Identifier::parse(identifier.as_ref())?.resolve(base)?;
        let method = method.unwrap_or_default();

        debug!(identifier = identifier.as_ref(), path = %path, "Resolved identifier");

        let options = DispatchOptions {
            body,
            content_type: content_type.or_else(|| self.config.content_type.clone()),
        };

        Ok(self.dispatcher.dispatch(&path, &method, options).await)
    }
}

/// Performs one request with the default configuration.
pub async fn fetch(identifier: impl AsRef<str>, options: RequestOptions) -> Result<Response> {
    Fetch::default().request(identifier, options).await
}
