mod api_error;
pub use api_error::ApiError;
mod error;
pub use error::{ClientError, FetchError, StoreError};
mod quote;
pub use quote::{Quote, StoredQuote};

use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
    serde::json,
};
use serde::Serialize;
use std::io::Cursor;

/// `application/json; charset=utf-8`, used for every body the server writes.
pub fn json_utf8() -> ContentType {
    ContentType::new("application", "json").with_params(("charset", "utf-8"))
}

pub struct JsonBody<T>(pub T);

impl<'r, T: Serialize> Responder<'r, 'static> for JsonBody<T> {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = json::to_string(&self.0).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(json_utf8())
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

pub enum ApiResult<T> {
    Ok(JsonBody<T>),
    Err(ApiError),
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiResult<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ApiResult::Ok(body) => body.respond_to(req),
            ApiResult::Err(e) => e.respond_to(req),
        }
    }
}

impl<T> From<Result<T, FetchError>> for ApiResult<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(val) => ApiResult::Ok(JsonBody(val)),
            Err(e) => ApiResult::Err(e.into()),
        }
    }
}
