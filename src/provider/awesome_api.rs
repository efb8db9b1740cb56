use crate::{
    deadline::Deadline,
    http::get_json,
    model::{FetchError, Quote},
    provider::QuoteProvider,
};
use reqwest::Client;
use serde::Deserialize;

pub struct AwesomeApi {
    url: String,
    client: Client,
}

#[derive(Deserialize)]
struct AwesomeApiResponse {
    #[serde(rename = "USDBRL")]
    usd_brl: AwesomeApiQuote,
}

#[derive(Deserialize)]
struct AwesomeApiQuote {
    bid: String,
}

impl AwesomeApi {
    pub fn new(url: &str, client: Client) -> AwesomeApi {
        AwesomeApi {
            url: url.to_string(),
            client,
        }
    }
}

#[rocket::async_trait]
impl QuoteProvider for AwesomeApi {
    fn name(&self) -> &str {
        "awesomeapi"
    }

    async fn fetch(&self, deadline: Deadline) -> Result<Quote, FetchError> {
        let res: AwesomeApiResponse = get_json(&self.client, &self.url, deadline).await?;
        let bid = res.usd_brl.bid;

        if bid.is_empty() {
            return Err(FetchError::Decode("empty bid".into()));
        }

        Ok(Quote { bid })
    }
}
