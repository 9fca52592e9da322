use std::fmt;
use std::sync::Arc;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const APPLICATION_JSON: &str = "application/json";

type Lookup = Arc<dyn Fn(Option<&str>) -> Option<String> + Send + Sync>;

/// Caller override for the `content-type` of GET and HEAD responses.
#[derive(Clone)]
pub enum ContentType {
    Fixed(String),
    /// Called with the file extension (no leading dot).
    Lookup(Lookup),
}

impl ContentType {
    pub fn fixed(value: impl Into<String>) -> Self {
        Self::Fixed(value.into())
    }

    pub fn lookup<F>(f: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        Self::Lookup(Arc::new(f))
    }

    fn evaluate(&self, extension: Option<&str>) -> Option<String> {
        let value = match self {
            ContentType::Fixed(value) => Some(value.clone()),
            ContentType::Lookup(f) => f(extension),
        };
        value.filter(|value| !value.is_empty())
    }

    /// Media type for a file: the override first, then the extension table,
    /// then `application/octet-stream`.
    pub fn resolve(content_type: Option<&ContentType>, extension: Option<&str>) -> String {
        content_type
            .and_then(|c| c.evaluate(extension))
            .or_else(|| extension.and_then(mime_for_extension).map(str::to_string))
            .unwrap_or_else(|| OCTET_STREAM.to_string())
    }
}

impl fmt::Debug for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            ContentType::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}

impl From<&str> for ContentType {
    fn from(value: &str) -> Self {
        Self::fixed(value)
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        Self::Fixed(value)
    }
}

/// Media type registered for a file extension, matched case-insensitively.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "txt" | "text" | "log" => "text/plain; charset=utf-8",
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "md" | "markdown" => "text/markdown; charset=utf-8",
        "js" | "mjs" | "cjs" => "application/javascript; charset=utf-8",
        "json" | "map" => "application/json; charset=utf-8",
        "jsonld" => "application/ld+json",
        "xml" => "application/xml",
        "yaml" | "yml" => "text/yaml",
        "toml" => "application/toml",
        "ttl" => "text/turtle",
        "nt" => "application/n-triples",
        "nq" => "application/n-quads",
        "trig" => "application/trig",
        "rdf" | "owl" => "application/rdf+xml",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/vnd.microsoft.icon",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "wasm" => "application/wasm",
        "woff2" => "font/woff2",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lookup_known_extension() {
        assert_eq!(mime_for_extension("txt"), Some("text/plain; charset=utf-8"));
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
    }

    #[test]
    fn test_lookup_unknown_extension() {
        assert_eq!(mime_for_extension("unknown-ext"), None);
    }

    #[test]
    fn test_resolve_without_override_uses_extension() {
        let actual = ContentType::resolve(None, Some("json"));
        assert_eq!(actual, "application/json; charset=utf-8");
    }

    #[test]
    fn test_resolve_fixed_override() {
        let fixture = ContentType::fixed("application/json");
        let actual = ContentType::resolve(Some(&fixture), Some("txt"));
        assert_eq!(actual, "application/json");
    }

    #[test]
    fn test_resolve_lookup_override_receives_extension() {
        let fixture = ContentType::lookup(|ext| ext.map(|e| format!("application/x-{e}")));
        let actual = ContentType::resolve(Some(&fixture), Some("ttl"));
        assert_eq!(actual, "application/x-ttl");
    }

    #[test]
    fn test_resolve_lookup_miss_falls_back_to_extension() {
        let fixture = ContentType::lookup(|_| None);
        let actual = ContentType::resolve(Some(&fixture), Some("txt"));
        assert_eq!(actual, "text/plain; charset=utf-8");
    }

    #[test]
    fn test_resolve_falls_back_to_octet_stream() {
        let fixture = ContentType::lookup(|_| None);
        assert_eq!(ContentType::resolve(Some(&fixture), Some("bin42")), OCTET_STREAM);
        assert_eq!(ContentType::resolve(None, None), OCTET_STREAM);
    }
}
