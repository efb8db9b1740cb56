use cotacao::{client, conf::Conf, logging};
use std::process::exit;
use tracing::error;

#[tokio::main]
async fn main() {
    logging::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    if let Err(e) = client::run(&conf.client).await {
        error!(%e, server_url = %conf.client.server_url, "Unable to fetch quote");
        exit(1);
    }
}
