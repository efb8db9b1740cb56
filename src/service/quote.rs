use crate::{
    app::App,
    deadline::Deadline,
    model::{FetchError, Quote},
    repository::QuoteRepository,
};
use tracing::{debug, error, warn};

/// Fetches a fresh quote under a child of `request` and records it.
/// Only the fetch can fail the call; the store write is best-effort.
pub async fn get(app: &App, request: Deadline) -> Result<Quote, FetchError> {
    let provider = app.provider.name();

    let quote = match app.provider.fetch(request.child(app.timeouts.upstream)).await {
        Ok(quote) => quote,
        Err(e) if e.is_deadline() => {
            warn!(provider, %e, "Upstream quote request timed out");
            return Err(e);
        }
        Err(e) => {
            error!(provider, %e, "Upstream quote request failed");
            return Err(e);
        }
    };

    persist(app.repo.clone(), &quote, request.child(app.timeouts.store)).await;

    Ok(quote)
}

/// Runs the write on its own task so it isn't torn down with the request.
async fn persist(repo: QuoteRepository, quote: &Quote, deadline: Deadline) {
    let bid = quote.bid.clone();
    let write = tokio::spawn(async move { repo.insert(&bid, deadline).await });

    match write.await {
        Ok(Ok(id)) => debug!(id, bid = %quote.bid, "Stored quote"),
        Ok(Err(e)) if e.is_deadline() => warn!(%e, bid = %quote.bid, "Timed out storing quote"),
        Ok(Err(e)) => error!(%e, bid = %quote.bid, "Failed to store quote"),
        Err(e) => error!(%e, bid = %quote.bid, "Store task failed"),
    }
}
