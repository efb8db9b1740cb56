use crate::{
    conf::ClientConf,
    deadline::Deadline,
    http::get_json,
    model::{ClientError, Quote},
};
use std::{fs, path::Path};
use tracing::info;

pub fn render(quote: &Quote) -> String {
    format!("Cotação do dólar: {}", quote.bid)
}

/// Overwrites `path` with the rendered quote.
pub fn write(path: &Path, quote: &Quote) -> Result<(), ClientError> {
    fs::write(path, render(quote)).map_err(|source| ClientError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// One request to the quote server, one write. The output file is left
/// alone unless a quote was received.
pub async fn run(conf: &ClientConf) -> Result<Quote, ClientError> {
    let deadline = Deadline::after(conf.timeout());
    let quote: Quote = get_json(&reqwest::Client::new(), &conf.server_url, deadline).await?;
    write(&conf.output_file, &quote)?;
    info!(path = %conf.output_file.display(), bid = %quote.bid, "Quote saved");
    Ok(quote)
}
