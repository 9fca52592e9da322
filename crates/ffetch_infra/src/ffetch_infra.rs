use std::path::Path;
use std::sync::Arc;

use ffetch_app::{FileInfoInfra, FileReaderInfra, FileWriterInfra};
use ffetch_domain::ByteStream;

use crate::fs_meta::FetchFileMetaService;
use crate::fs_read::FetchFileReadService;
use crate::fs_write::FetchFileWriteService;

/// Local filesystem backing for the dispatcher, built on `tokio::fs`.
#[derive(Clone, Default)]
pub struct FetchInfra {
    file_read_service: Arc<FetchFileReadService>,
    file_write_service: Arc<FetchFileWriteService>,
    file_meta_service: Arc<FetchFileMetaService>,
}

impl FetchInfra {
    pub fn new() -> Self {
        Self {
            file_read_service: Arc::new(FetchFileReadService::new()),
            file_write_service: Arc::new(FetchFileWriteService::new()),
            file_meta_service: Arc::new(FetchFileMetaService),
        }
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for FetchInfra {
    async fn file_size(&self, path: &Path) -> Option<u64> {
        self.file_meta_service.file_size(path).await
    }

    async fn is_readable(&self, path: &Path) -> bool {
        self.file_meta_service.is_readable(path).await
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for FetchInfra {
    async fn open_read(&self, path: &Path) -> anyhow::Result<ByteStream> {
        self.file_read_service.open_read(path).await
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for FetchInfra {
    async fn write_stream(&self, path: &Path, contents: ByteStream) -> anyhow::Result<()> {
        self.file_write_service.write_stream(path, contents).await
    }
}
