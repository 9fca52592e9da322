use std::path::Path;

use ffetch_app::FileInfoInfra;

#[derive(Default)]
pub struct FetchFileMetaService;

#[async_trait::async_trait]
impl FileInfoInfra for FetchFileMetaService {
    async fn file_size(&self, path: &Path) -> Option<u64> {
        tokio::fs::metadata(path)
            .await
            .ok()
            .filter(|meta| meta.is_file())
            .map(|meta| meta.len())
    }

    async fn is_readable(&self, path: &Path) -> bool {
        // Opening is the portable read-permission check; the handle is dropped
        // right away.
        match tokio::fs::File::open(path).await {
            Ok(file) => file.metadata().await.is_ok_and(|meta| meta.is_file()),
            Err(_) => false,
        }
    }
}
