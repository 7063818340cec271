pub mod error;

pub use error::{domain_error_response, missing_fields_response};
