use anyhow::Context;
use ffetch_api::{Base, ContentType, Fetch, FetchConfig, RequestBody, RequestOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::io::{ReaderStream, StreamReader};

use crate::Cli;

/// Executes the request described by `cli` and writes the response to `out`.
///
/// Returns whether the response status was in the 2xx range.
pub async fn run<W: AsyncWrite + Unpin>(cli: Cli, out: &mut W) -> anyhow::Result<bool> {
    let mut config = FetchConfig::default();
    if let Some(base) = &cli.base {
        config = config.base(Base::parse(base).with_context(|| format!("Invalid base {base}"))?);
    }
    if let Some(content_type) = cli.content_type.clone() {
        config = config.content_type(ContentType::fixed(content_type));
    }

    let mut options = RequestOptions::default().method(cli.method.as_str());
    if let Some(body) = request_body(&cli).await? {
        options = options.body(body);
    }

    let response = Fetch::new(config)
        .request(&cli.identifier, options)
        .await
        .with_context(|| format!("Failed to resolve {}", cli.identifier))?;
    let ok = response.ok();

    if cli.include {
        let mut head = format!(
            "{} {}\n",
            response.status().as_u16(),
            response.status_text().unwrap_or_default()
        );
        for (name, value) in response.headers() {
            head.push_str(&format!("{}: {}\n", name, value.to_str().unwrap_or_default()));
        }
        head.push('\n');
        out.write_all(head.as_bytes()).await?;
    }

    if let Some(body) = response.into_body() {
        let mut reader = StreamReader::new(body);
        tokio::io::copy(&mut reader, out)
            .await
            .context("Failed to write response body")?;
    }

    out.flush().await?;
    Ok(ok)
}

async fn request_body(cli: &Cli) -> anyhow::Result<Option<RequestBody>> {
    if let Some(data) = &cli.data {
        return Ok(Some(RequestBody::from(data.as_str())));
    }

    if let Some(path) = &cli.data_file {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        return Ok(Some(RequestBody::stream(ReaderStream::new(file))));
    }

    if cli.data_stdin {
        return Ok(Some(RequestBody::stream(ReaderStream::new(tokio::io::stdin()))));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    async fn execute(args: &[&str]) -> (bool, String) {
        let cli = Cli::try_parse_from(std::iter::once("ffetch").chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        let ok = run(cli, &mut out).await.unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_get_prints_body() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("file.txt"), "test").unwrap();
        let base = temp_dir.path().display().to_string();

        let actual = execute(&["--base", &base, "file.txt"]).await;

        assert_eq!(actual, (true, "test".to_string()));
    }

    #[tokio::test]
    async fn test_include_prints_status_and_headers() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("file.txt"), "test").unwrap();
        let base = temp_dir.path().display().to_string();

        let (ok, actual) = execute(&["-i", "-X", "HEAD", "--base", &base, "file.txt"]).await;

        assert!(ok);
        assert_eq!(actual, "200 OK\ncontent-type: text/plain; charset=utf-8\n\n");
    }

    #[tokio::test]
    async fn test_put_data_then_missing_file() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().display().to_string();

        let (ok, _) = execute(&["-X", "put", "-d", "hello", "--base", &base, "out.txt"]).await;
        assert!(ok);
        assert_eq!(std::fs::read_to_string(temp_dir.path().join("out.txt")).unwrap(), "hello");

        let (ok, actual) = execute(&["--base", &base, "missing.txt"]).await;
        assert!(!ok);
        assert_eq!(actual, r#"{"title":"File not found"}"#);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_an_error() {
        let cli = Cli::try_parse_from(["ffetch", "http://example.org/"]).unwrap();
        let mut out = Vec::new();

        let actual = run(cli, &mut out).await;

        assert!(actual.is_err());
    }
}
