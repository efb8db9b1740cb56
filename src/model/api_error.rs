use super::{json_utf8, FetchError};
use anyhow::Error;
use rocket::{
    http::Status,
    request::Request,
    response::{self, Responder, Response},
    serde::json,
};
use serde::Serialize;
use std::io::Cursor;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing)]
    pub error: Option<Error>,
}

impl ApiError {
    pub fn new(status: Status, error: Error) -> ApiError {
        ApiError {
            error: Some(error),
            ..ApiError::from(status)
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = &self.error {
            error!(%error, code = self.code, "Error from controller");
        }

        let body = json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(json_utf8())
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<Status> for ApiError {
    fn from(s: Status) -> Self {
        ApiError {
            code: s.code,
            message: s.reason().unwrap_or("").to_string(),
            error: None,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::new(e.status(), e.into())
    }
}
