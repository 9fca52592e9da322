mod dispatch;
mod infra;

#[cfg(test)]
pub mod test_fixtures;

pub use dispatch::*;
pub use ffetch_domain as domain;
pub use infra::*;
