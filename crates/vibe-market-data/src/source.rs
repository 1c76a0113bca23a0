//! Stock Data Sources
//!
//! The async port the header prefetch calls, plus the bundled
//! implementations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::summary::StockSummary;
use crate::{MarketDataError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Stock data source port
#[async_trait]
pub trait StockDataSource: Send + Sync {
    /// Fetch the searchable summary set, in upstream order
    async fn fetch_stock_summaries(&self) -> Result<Vec<StockSummary>>;
}

/// Fixed in-memory source for tests and offline rendering
pub struct StaticStockSource {
    summaries: Vec<StockSummary>,
}

impl StaticStockSource {
    pub fn new(summaries: Vec<StockSummary>) -> Self {
        Self { summaries }
    }

    /// Popular-symbol seed set
    pub fn seeded() -> Self {
        Self::new(vec![
            StockSummary::new("AAPL", "Apple Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("MSFT", "Microsoft Corp", "NASDAQ", "Common Stock"),
            StockSummary::new("GOOGL", "Alphabet Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("AMZN", "Amazon.com Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("NVDA", "NVIDIA Corp", "NASDAQ", "Common Stock"),
            StockSummary::new("TSLA", "Tesla Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("META", "Meta Platforms Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("NFLX", "Netflix Inc", "NASDAQ", "Common Stock"),
            StockSummary::new("JPM", "JPMorgan Chase & Co", "NYSE", "Common Stock"),
            StockSummary::new("V", "Visa Inc", "NYSE", "Common Stock"),
        ])
    }
}

#[async_trait]
impl StockDataSource for StaticStockSource {
    async fn fetch_stock_summaries(&self) -> Result<Vec<StockSummary>> {
        Ok(self.summaries.clone())
    }
}

/// REST client for the market-data service
pub struct HttpStockSource {
    base_url: String,
    client: Client,
}

impl HttpStockSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl StockDataSource for HttpStockSource {
    async fn fetch_stock_summaries(&self) -> Result<Vec<StockSummary>> {
        let url = format!("{}/api/v1/stocks/summaries", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MarketDataError::Upstream(response.status().to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_seed_in_order() {
        let source = StaticStockSource::seeded();
        let summaries = source.fetch_stock_summaries().await.unwrap();
        assert_eq!(summaries.len(), 10);
        assert_eq!(summaries[0].symbol, "AAPL");
        assert_eq!(summaries[9].symbol, "V");
    }

    #[tokio::test]
    async fn test_static_source_custom_set() {
        let source = StaticStockSource::new(vec![StockSummary::new(
            "IBM",
            "International Business Machines",
            "NYSE",
            "Common Stock",
        )]);
        let summaries = source.fetch_stock_summaries().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].symbol, "IBM");
    }
}
