use std::path::Path;

use anyhow::{Context, bail};
use ffetch_app::FileReaderInfra;
use ffetch_domain::ByteStream;
use futures::StreamExt;
use tokio_util::io::ReaderStream;

/// Low-level file read service
///
/// Hands out a lazily read stream over an opened file. Nothing is read until
/// the stream is polled.
#[derive(Default)]
pub struct FetchFileReadService;

impl FetchFileReadService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for FetchFileReadService {
    async fn open_read(&self, path: &Path) -> anyhow::Result<ByteStream> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let meta = file
            .metadata()
            .await
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?;

        if !meta.is_file() {
            bail!("Failed to open {}: not a regular file", path.display());
        }

        Ok(ReaderStream::new(file).boxed())
    }
}
