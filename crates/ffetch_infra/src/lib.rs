mod ffetch_infra;
mod fs_meta;
mod fs_read;
mod fs_write;

pub use ffetch_infra::*;
pub use fs_meta::FetchFileMetaService;
pub use fs_read::FetchFileReadService;
pub use fs_write::FetchFileWriteService;
