use std::process::ExitCode;

use clap::Parser;
use ffetch_main::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.clone(), cli.verbose)?;

    let mut stdout = tokio::io::stdout();
    let code = if run(cli, &mut stdout).await? { ExitCode::SUCCESS } else { ExitCode::FAILURE };

    Ok(code)
}
