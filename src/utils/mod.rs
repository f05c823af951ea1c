pub mod image;
pub mod parameter_error_handler;
pub mod password;
pub mod validate;

pub use image::{to_base64, to_data_uri};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use validate::validate_schema_name;
