use crate::{
    deadline::Deadline,
    model::{FetchError, Quote},
};

/// A source of USD/BRL quotes.
#[rocket::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fetches the latest quote. Implementations must give up once
    /// `deadline` passes.
    async fn fetch(&self, deadline: Deadline) -> Result<Quote, FetchError>;
}
