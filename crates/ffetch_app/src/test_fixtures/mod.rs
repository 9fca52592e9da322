mod mock_infra;

pub use mock_infra::*;
