use crate::{deadline::Deadline, model::FetchError};
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Issues a single JSON `GET` bounded by `deadline`. Anything but `200 OK`
/// is a failure; nothing is retried.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    deadline: Deadline,
) -> Result<T, FetchError> {
    if deadline.is_expired() {
        return Err(FetchError::Canceled);
    }

    debug!(%url, remaining = ?deadline.remaining(), "Sending request");

    deadline
        .run(async {
            let res = client
                .get(url)
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            if res.status() != StatusCode::OK {
                return Err(FetchError::BadStatus(res.status().as_u16()));
            }

            Ok::<T, FetchError>(res.json::<T>().await?)
        })
        .await
        .map_err(|_| FetchError::Timeout)?
}
