mod openapi;
pub mod schemas;

pub use openapi::ApiDoc;
