use rusqlite::Connection;

pub fn run(c: &Connection) -> rusqlite::Result<()> {
    c.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS quote (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bid TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
}
