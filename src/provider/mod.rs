mod provider;
pub use provider::QuoteProvider;
mod awesome_api;
pub use awesome_api::AwesomeApi;

#[cfg(test)]
pub(crate) use awesome_api::test::{create_mock_server, upstream_url, USD_BRL};
