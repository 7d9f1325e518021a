use serde::{Deserialize, Serialize};

/// Market values of one coin at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

/// Result of one refresh: the freshly fetched values and whatever was stored before them
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    pub coin_id: String,
    pub current: Snapshot,
    pub previous: Option<Snapshot>,
}
