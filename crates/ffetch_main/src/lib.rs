mod cli;
mod log;
mod run;

pub use cli::Cli;
pub use log::{Guard, init_tracing};
pub use run::run;
