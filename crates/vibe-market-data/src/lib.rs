//! VibeMarket Market Data
//!
//! Stock summary records and the data source port feeding the header's
//! search widgets. The upstream feed is an external collaborator; this crate
//! owns only the narrow fetch contract and search over the fetched set.

use thiserror::Error;

pub mod source;
pub mod summary;

pub use source::{HttpStockSource, StaticStockSource, StockDataSource};
pub use summary::{search_summaries, StockSummary};

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MarketDataError>;
