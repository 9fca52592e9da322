use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::{Error, Result};

lazy_static! {
    static ref SCHEME: Regex = Regex::new(r"^([a-z]+):").unwrap();
    static ref ROOT: Url = Url::parse("file:///").unwrap();
}

const FILE_SCHEME: &str = "file";

/// Returns the lower-case scheme prefix of `input`, if it carries one.
fn scheme(input: &str) -> Option<&str> {
    SCHEME
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// A caller-supplied name for a file.
///
/// Classification happens once, in [`Identifier::parse`]; resolution then
/// works on the variant instead of re-inspecting string prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// A filesystem path without a scheme, relative or absolute.
    Plain(String),
    /// `file:` followed directly by a path, without an authority. Holds the
    /// part after `file:`.
    FileUri(String),
    /// A full `file://<authority><path>` URL.
    FileUrl(Url),
}

impl Identifier {
    pub fn parse(input: &str) -> Result<Self> {
        match scheme(input) {
            None => Ok(Self::Plain(input.to_string())),
            Some(FILE_SCHEME) if input.starts_with("file://") => Url::parse(input)
                .map(Self::FileUrl)
                .map_err(|e| Error::invalid_identifier(input, e)),
            Some(FILE_SCHEME) => Ok(Self::FileUri(input[FILE_SCHEME.len() + 1..].to_string())),
            Some(_) => Err(Error::UnsupportedScheme { identifier: input.to_string() }),
        }
    }

    /// Turns the identifier into an absolute, percent-decoded native path.
    ///
    /// Plain paths are joined onto the base directory literally, so segments
    /// like `a%20b` are kept as written. `file:` inputs go through URL
    /// resolution and are decoded afterwards.
    pub fn resolve(&self, base: &Base) -> Result<ResolvedReference> {
        let path = match self {
            Identifier::Plain(path) => base.directory()?.join(path),
            Identifier::FileUrl(url) => file_path(url)?,
            Identifier::FileUri(rest) if rest.starts_with('/') => file_path(&join(&ROOT, rest)?)?,
            Identifier::FileUri(rest) => match base {
                Base::Url(base_url) => file_path(&join(base_url, rest)?)?,
                Base::WorkingDirectory => {
                    let cwd = base.directory()?;
                    let cwd_url = Url::from_directory_path(&cwd).map_err(|_| {
                        Error::invalid_identifier(cwd.display().to_string(), "not an absolute path")
                    })?;
                    file_path(&join(&cwd_url, rest)?)?
                }
                Base::Directory(_) => {
                    // Decoding against the root yields "/rest"; drop that one
                    // leading slash so the result stays relative to the base.
                    let decoded = file_path(&join(&ROOT, rest)?)?;
                    let relative = decoded.strip_prefix("/").unwrap_or(&decoded);
                    base.directory()?.join(relative)
                }
            },
        };

        Ok(ResolvedReference(path))
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&Url> for Identifier {
    type Error = Error;

    fn try_from(url: &Url) -> Result<Self> {
        Self::parse(url.as_str())
    }
}

/// The location relative identifiers are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Base {
    /// The process working directory at resolution time.
    #[default]
    WorkingDirectory,
    /// A directory path. Relative paths are taken from the working directory.
    Directory(PathBuf),
    /// A `file:` URL. Without a trailing slash its parent directory is used,
    /// the same way a URL join treats the last path segment.
    Url(Url),
}

impl Base {
    pub fn parse(input: &str) -> Result<Self> {
        match scheme(input) {
            None => Ok(Self::Directory(PathBuf::from(input))),
            Some(_) => Url::parse(input)
                .map_err(|e| Error::invalid_identifier(input, e))
                .and_then(Self::url),
        }
    }

    pub fn url(url: Url) -> Result<Self> {
        if url.scheme() != FILE_SCHEME {
            return Err(Error::UnsupportedScheme { identifier: url.to_string() });
        }
        Ok(Self::Url(url))
    }

    /// Absolute directory that plain paths are joined onto.
    pub fn directory(&self) -> Result<PathBuf> {
        match self {
            Base::WorkingDirectory => std::env::current_dir().map_err(Error::WorkingDirectory),
            Base::Directory(dir) if dir.is_absolute() => Ok(dir.clone()),
            Base::Directory(dir) => std::env::current_dir()
                .map(|cwd| cwd.join(dir))
                .map_err(Error::WorkingDirectory),
            Base::Url(url) => file_path(&join(url, "./")?),
        }
    }
}

impl FromStr for Base {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PathBuf> for Base {
    fn from(dir: PathBuf) -> Self {
        Self::Directory(dir)
    }
}

impl From<&Path> for Base {
    fn from(dir: &Path) -> Self {
        Self::Directory(dir.to_path_buf())
    }
}

/// Absolute, percent-decoded native path produced by
/// [`Identifier::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedReference(PathBuf);

impl ResolvedReference {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Extension without the leading dot.
    pub fn extension(&self) -> Option<&str> {
        self.0.extension().and_then(|ext| ext.to_str())
    }
}

impl Deref for ResolvedReference {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ResolvedReference {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn join(base: &Url, input: &str) -> Result<Url> {
    base.join(input).map_err(|e| Error::invalid_identifier(input, e))
}

fn file_path(url: &Url) -> Result<PathBuf> {
    url.to_file_path()
        .map_err(|_| Error::invalid_identifier(url.as_str(), "not a local file path"))
}
