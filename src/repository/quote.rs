use crate::{
    deadline::Deadline,
    model::{StoreError, StoredQuote},
};
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, InterruptHandle};
use std::sync::{Arc, Mutex};
use tokio::task;

#[derive(Clone)]
pub struct QuoteRepository {
    pool: Pool<SqliteConnectionManager>,
}

impl QuoteRepository {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> QuoteRepository {
        QuoteRepository { pool }
    }

    /// Appends a bid and returns its id. The blocking write runs off the
    /// async runtime; if `deadline` passes first the statement is
    /// interrupted and `StoreError::Timeout` is returned.
    pub async fn insert(&self, bid: &str, deadline: Deadline) -> Result<i64, StoreError> {
        if bid.is_empty() {
            return Err(StoreError::EmptyBid);
        }

        let remaining = deadline.remaining().ok_or(StoreError::Canceled)?;
        let pool = self.pool.clone();
        let bid = bid.to_string();
        let interrupt: Arc<Mutex<Option<InterruptHandle>>> = Arc::default();
        let slot = interrupt.clone();

        let write = task::spawn_blocking(move || -> Result<i64, StoreError> {
            let conn = pool.get_timeout(remaining).map_err(|_| StoreError::Timeout)?;
            set(&slot, Some(conn.get_interrupt_handle()));

            if deadline.is_expired() {
                set(&slot, None);
                return Err(StoreError::Timeout);
            }

            let res = conn.execute("INSERT INTO quote (bid) VALUES (?)", params![bid]);
            set(&slot, None);
            res?;
            Ok(conn.last_insert_rowid())
        });

        match deadline.run(write).await {
            Ok(joined) => joined?,
            Err(_) => {
                if let Some(handle) = interrupt.lock().ok().and_then(|mut it| it.take()) {
                    handle.interrupt();
                }
                Err(StoreError::Timeout)
            }
        }
    }

    pub fn select_all(&self) -> Result<Vec<StoredQuote>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, bid, created_at FROM quote ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoredQuote {
                    id: row.get(0)?,
                    bid: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

fn set(slot: &Mutex<Option<InterruptHandle>>, handle: Option<InterruptHandle>) {
    if let Ok(mut it) = slot.lock() {
        *it = handle;
    }
}
