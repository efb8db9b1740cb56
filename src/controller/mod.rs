pub mod quote;

use crate::model::ApiError;
use rocket::{catch, http::Status, Request};

#[catch(default)]
pub fn error(status: Status, req: &Request) -> ApiError {
    ApiError {
        message: format!("Failed to handle URI {}", req.uri()),
        ..ApiError::from(status)
    }
}
