use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream, Fuse};
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;

use crate::Result;

pub type ByteStream = BoxStream<'static, io::Result<Bytes>>;

/// Single-use byte stream carried by a response.
///
/// `text`, `json` and `bytes` drain whatever is left of the stream. Nothing is
/// cached, so draining a second time sees an empty stream.
pub struct Body {
    stream: Fuse<ByteStream>,
}

impl Body {
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self { stream: stream.boxed().fuse() }
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self::new(stream::iter(Some(Ok(bytes.into()))))
    }

    pub async fn bytes(&mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.stream.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }

    pub async fn text(&mut self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    pub async fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        let bytes = self.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn into_stream(self) -> ByteStream {
        self.stream.boxed()
    }
}

impl Stream for Body {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.stream.poll_next_unpin(cx)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").finish_non_exhaustive()
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Self::from_bytes(value)
    }
}

impl From<&'static str> for Body {
    fn from(value: &'static str) -> Self {
        Self::from_bytes(value)
    }
}

impl From<Bytes> for Body {
    fn from(value: Bytes) -> Self {
        Self::from_bytes(value)
    }
}

impl From<Vec<u8>> for Body {
    fn from(value: Vec<u8>) -> Self {
        Self::from_bytes(value)
    }
}

/// Body accepted by a PUT request. Every form is turned into a
/// [`ByteStream`] before anything is written.
pub enum RequestBody {
    Text(String),
    Bytes(Bytes),
    Stream(ByteStream),
}

impl RequestBody {
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self::Stream(stream.boxed())
    }

    pub fn into_stream(self) -> ByteStream {
        match self {
            RequestBody::Text(text) => stream::iter(Some(Ok(Bytes::from(text)))).boxed(),
            RequestBody::Bytes(bytes) => stream::iter(Some(Ok(bytes))).boxed(),
            RequestBody::Stream(stream) => stream,
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Text(text) => f.debug_tuple("Text").field(text).finish(),
            RequestBody::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            RequestBody::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RequestBody {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Bytes> for RequestBody {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<Body> for RequestBody {
    fn from(value: Body) -> Self {
        Self::Stream(value.into_stream())
    }
}
