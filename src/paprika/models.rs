use serde::Deserialize;
use std::collections::HashMap;

use crate::entity::{BotError, Snapshot};

/// Ticker returned by `GET /tickers/{coin_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Quotes keyed by upper-case currency code
    pub quotes: HashMap<String, Quote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

impl Ticker {
    /// Picks the quote for `currency` out of the ticker
    pub fn snapshot(&self, coin_id: &str, currency: &str) -> Result<Snapshot, BotError> {
        let quote = self
            .quotes
            .get(currency)
            .ok_or_else(|| BotError::MissingQuote {
                currency: currency.to_string(),
                coin_id: coin_id.to_string(),
            })?;

        Ok(Snapshot {
            price: quote.price,
            market_cap: quote.market_cap,
            volume_24h: quote.volume_24h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_requested_quote() {
        let ticker: Ticker = serde_json::from_value(json!({
            "id": "hypec-hype",
            "symbol": "HYPE",
            "rank": 12,
            "quotes": {
                "USD": {
                    "price": 10.0,
                    "market_cap": 1000,
                    "volume_24h": 500,
                    "percent_change_24h": 1.5
                }
            }
        }))
        .unwrap();

        let snapshot = ticker.snapshot("hypec-hype", "USD").unwrap();
        assert_eq!(
            snapshot,
            Snapshot {
                price: 10.0,
                market_cap: 1000.0,
                volume_24h: 500.0,
            }
        );
    }

    #[test]
    fn missing_currency_is_data_error() {
        let ticker: Ticker = serde_json::from_value(json!({
            "quotes": {
                "USD": { "price": 1.0, "market_cap": 2.0, "volume_24h": 3.0 }
            }
        }))
        .unwrap();

        let err = ticker.snapshot("hypec-hype", "EUR").unwrap_err();
        assert!(matches!(
            err,
            BotError::MissingQuote { ref currency, .. } if currency == "EUR"
        ));
    }
}
