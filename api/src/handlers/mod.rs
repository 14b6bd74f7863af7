pub mod error;

pub use error::{
    domain_error_response, json_error_handler, validation_error_response, verify_result_response,
};
