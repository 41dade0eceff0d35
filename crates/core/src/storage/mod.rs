mod error;
mod http_mapping;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
