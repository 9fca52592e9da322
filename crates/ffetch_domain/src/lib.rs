mod body;
mod content_type;
mod error;
mod identifier;
mod method;
mod response;

pub use body::*;
pub use content_type::*;
pub use error::*;
pub use identifier::*;
pub use method::*;
pub use response::*;
