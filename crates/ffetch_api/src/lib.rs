mod fetch;
mod options;

pub use fetch::*;
pub use ffetch_domain::{
    Base, Body, ByteStream, ContentType, Error, ErrorBody, Identifier, Method, RequestBody,
    ResolvedReference, Response, Result,
};
pub use options::*;
