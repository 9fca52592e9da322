use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path, `file:` URI or `file://` URL of the file.
    pub identifier: String,

    /// Request method: GET, HEAD or PUT.
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Directory or `file:` URL that relative identifiers resolve against.
    ///
    /// Defaults to the current working directory.
    #[arg(long)]
    pub base: Option<String>,

    /// Fixed `content-type` reported for GET and HEAD instead of the one
    /// derived from the file extension.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Text written by PUT.
    #[arg(long, short = 'd', group = "body_source")]
    pub data: Option<String>,

    /// File whose content is written by PUT.
    #[arg(long, group = "body_source")]
    pub data_file: Option<PathBuf>,

    /// Write standard input with PUT.
    #[arg(long, group = "body_source", default_value_t = false)]
    pub data_stdin: bool,

    /// Print the status line and headers before the body.
    #[arg(long, short = 'i', default_value_t = false)]
    pub include: bool,

    /// Enable verbose logging output.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Write JSON logs to a daily rolling file in this directory instead of
    /// standard error.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
