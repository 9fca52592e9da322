use std::path::Path;

use anyhow::Context;
use ffetch_app::FileWriterInfra;
use ffetch_domain::ByteStream;
use tokio::io::AsyncWriteExt;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Low-level file write service
///
/// Truncates the target and copies a byte stream into it. No temporary file
/// and rename, so a failed copy can leave partial content behind.
#[derive(Default)]
pub struct FetchFileWriteService;

impl FetchFileWriteService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for FetchFileWriteService {
    async fn write_stream(&self, path: &Path, contents: ByteStream) -> anyhow::Result<()> {
        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;

        let mut reader = StreamReader::new(contents);
        let written = tokio::io::copy(&mut reader, &mut file)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        file.flush()
            .await
            .with_context(|| format!("Failed to flush {}", path.display()))?;

        debug!(path = %path.display(), bytes = written, "Wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use bytes::Bytes;
    use ffetch_domain::RequestBody;
    use futures::stream;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn create_test_service() -> FetchFileWriteService {
        FetchFileWriteService::new()
    }

    #[tokio::test]
    async fn test_write_stream_creates_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test.txt");

        create_test_service()
            .write_stream(&path, RequestBody::from("test").into_stream())
            .await
            .unwrap();

        let actual = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(actual, "test");
    }

    #[tokio::test]
    async fn test_write_stream_truncates_existing_content() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test.txt");
        tokio::fs::write(&path, "a much longer previous content").await.unwrap();

        create_test_service()
            .write_stream(&path, RequestBody::from("text").into_stream())
            .await
            .unwrap();

        let actual = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(actual, "text");
    }

    #[tokio::test]
    async fn test_write_stream_into_directory_fails() {
        let temp_dir = tempdir().unwrap();

        let actual = create_test_service()
            .write_stream(temp_dir.path(), RequestBody::from("x").into_stream())
            .await;

        assert!(actual.is_err());
    }

    #[tokio::test]
    async fn test_write_stream_does_not_create_parent_dirs() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("level1").join("test.txt");

        let actual = create_test_service()
            .write_stream(&path, RequestBody::from("x").into_stream())
            .await;

        assert!(actual.is_err());
        assert!(!path.parent().unwrap().exists());
    }

    #[tokio::test]
    async fn test_write_stream_reports_stream_errors() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test.txt");
        let chunks: Vec<io::Result<Bytes>> =
            vec![Ok(Bytes::from_static(b"part")), Err(io::Error::other("stream broke"))];

        let actual = create_test_service()
            .write_stream(&path, RequestBody::stream(stream::iter(chunks)).into_stream())
            .await;

        let error = actual.unwrap_err();
        assert!(format!("{error:#}").contains("stream broke"));
    }
}
