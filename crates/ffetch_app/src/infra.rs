use std::path::Path;

use ffetch_domain::ByteStream;

/// Metadata queries over a resolved path.
#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    /// Size in bytes; `None` when it cannot be determined. Never fails.
    async fn file_size(&self, path: &Path) -> Option<u64>;

    /// Whether `path` names a regular file that can be opened for reading.
    async fn is_readable(&self, path: &Path) -> bool;
}

#[async_trait::async_trait]
pub trait FileReaderInfra: Send + Sync {
    /// Opens `path` for streaming reads.
    ///
    /// Completes only once the file is open and known to be a regular file,
    /// or with the error that prevented it. No data is read up front.
    async fn open_read(&self, path: &Path) -> anyhow::Result<ByteStream>;
}

#[async_trait::async_trait]
pub trait FileWriterInfra: Send + Sync {
    /// Replaces the contents of `path` with everything `contents` yields.
    ///
    /// Completes after the last chunk is flushed, or with the first open,
    /// read or write error. Parent directories are not created.
    async fn write_stream(&self, path: &Path, contents: ByteStream) -> anyhow::Result<()>;
}
