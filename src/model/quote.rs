use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// USD/BRL bid as published upstream. Kept as text so the source precision
/// survives the round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredQuote {
    pub id: i64,
    pub bid: String,
    pub created_at: NaiveDateTime,
}
