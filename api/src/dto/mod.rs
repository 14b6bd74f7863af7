pub mod auth;

pub use auth::{RequestOtpRequest, VerifyOtpRequest};
