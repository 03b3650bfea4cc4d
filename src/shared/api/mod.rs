mod multipart_config;
mod response;

pub use multipart_config::{custom_multipart_config, multipart_error_response};
pub use response::ApiResponse;
