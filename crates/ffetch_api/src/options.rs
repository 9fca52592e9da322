use derive_setters::Setters;
use ffetch_domain::{Base, ContentType, Method, RequestBody};

/// Per-call options. Unset fields fall back to the [`FetchConfig`] of the
/// [`crate::Fetch`] handling the call.
#[derive(Debug, Default, Setters)]
#[setters(into, strip_option)]
pub struct RequestOptions {
    /// Defaults to GET. Case is ignored.
    pub method: Option<Method>,
    /// Content written by PUT.
    pub body: Option<RequestBody>,
    pub content_type: Option<ContentType>,
    pub base: Option<Base>,
}

/// Defaults shared by every request of a [`crate::Fetch`].
#[derive(Debug, Clone, Default, Setters)]
#[setters(into)]
pub struct FetchConfig {
    /// Location relative identifiers are resolved against. Defaults to the
    /// process working directory.
    pub base: Base,
    #[setters(strip_option)]
    pub content_type: Option<ContentType>,
}
