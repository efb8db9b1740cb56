use crate::{
    conf::ServerConf,
    db,
    provider::{AwesomeApi, QuoteProvider},
    repository::QuoteRepository,
};
use anyhow::Result;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct Timeouts {
    pub request: Duration,
    pub upstream: Duration,
    pub store: Duration,
}

/// Everything a request needs, built once at startup and handed to Rocket
/// as managed state.
pub struct App {
    pub provider: Box<dyn QuoteProvider>,
    pub repo: QuoteRepository,
    pub timeouts: Timeouts,
}

impl App {
    pub fn new(conf: &ServerConf) -> Result<App> {
        let pool = db::pool(conf)?;
        db::ensure_schema(&pool)?;

        Ok(App {
            provider: Box::new(AwesomeApi::new(&conf.upstream_url, reqwest::Client::new())),
            repo: QuoteRepository::new(pool),
            timeouts: conf.into(),
        })
    }
}

impl From<&ServerConf> for Timeouts {
    fn from(conf: &ServerConf) -> Self {
        Timeouts {
            request: conf.request_timeout(),
            upstream: conf.upstream_timeout(),
            store: conf.db_timeout(),
        }
    }
}
