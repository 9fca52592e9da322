//! In-memory infrastructure for dispatcher tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::bail;
use bytes::{Bytes, BytesMut};
use ffetch_domain::ByteStream;
use futures::{StreamExt, stream};

use crate::{FileInfoInfra, FileReaderInfra, FileWriterInfra};

#[derive(Debug, Default)]
pub struct MockInfra {
    files: Mutex<HashMap<PathBuf, Bytes>>,
    dirs: HashSet<PathBuf>,
    calls: Mutex<Vec<String>>,
}

impl MockInfra {
    pub fn new() -> Self {
        let mut infra = Self::default();
        infra.dirs.insert(PathBuf::from("/test"));
        infra.add_file("/test/file.txt", "test");
        infra.add_file("/test/data.json", r#"{"a":1}"#);
        infra
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Bytes>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<Bytes> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Names of the infra operations invoked so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockInfra {
    async fn file_size(&self, path: &Path) -> Option<u64> {
        self.record("file_size");
        self.file(path).map(|content| content.len() as u64)
    }

    async fn is_readable(&self, path: &Path) -> bool {
        self.record("is_readable");
        self.file(path).is_some()
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for MockInfra {
    async fn open_read(&self, path: &Path) -> anyhow::Result<ByteStream> {
        self.record("open_read");
        match self.file(path) {
            Some(content) => Ok(stream::iter(Some(Ok(content))).boxed()),
            None => bail!("Failed to open {}", path.display()),
        }
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockInfra {
    async fn write_stream(&self, path: &Path, mut contents: ByteStream) -> anyhow::Result<()> {
        self.record("write_stream");
        if self.dirs.contains(path) {
            bail!(io::Error::new(io::ErrorKind::IsADirectory, "Is a directory"));
        }

        let mut buf = BytesMut::new();
        while let Some(chunk) = contents.next().await {
            buf.extend_from_slice(&chunk?);
        }
        self.add_file(path, buf.freeze());
        Ok(())
    }
}
