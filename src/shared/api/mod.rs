mod json_config;
mod response;
mod validation;

pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use response::ApiResponse;
pub use validation::{positive_id, validate_payload, validation_details};
