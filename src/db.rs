use crate::{conf::ServerConf, migrations};
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

/// Opens the store: a single shared connection, reaped when idle, with a
/// busy timeout so concurrent writers queue instead of failing.
pub fn pool(conf: &ServerConf) -> Result<Pool<SqliteConnectionManager>> {
    let busy_timeout = conf.db_busy_timeout();
    let manager =
        SqliteConnectionManager::file(&conf.db_url).with_init(move |c| c.busy_timeout(busy_timeout));

    let pool = Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .idle_timeout(Some(conf.db_idle_timeout()))
        .build(manager)?;

    info!(db_url = %conf.db_url, "Opened database");
    Ok(pool)
}

pub fn ensure_schema(pool: &Pool<SqliteConnectionManager>) -> Result<()> {
    migrations::run(&*pool.get()?)?;
    info!("Schema is up to date");
    Ok(())
}
