//! Stock Summaries
//!
//! Lightweight records backing the header search widgets.

use serde::{Deserialize, Serialize};

/// One searchable listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    /// Asset type as reported upstream (Common Stock, ETP, ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl StockSummary {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        exchange: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            exchange: exchange.into(),
            kind: kind.into(),
        }
    }
}

/// Search a summary set by symbol or company name.
///
/// Case-insensitive. Symbol-prefix hits rank ahead of substring hits; an
/// empty query returns the leading slice, which is the header's initial
/// suggestion list.
pub fn search_summaries(summaries: &[StockSummary], query: &str, limit: usize) -> Vec<StockSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return summaries.iter().take(limit).cloned().collect();
    }

    let mut prefix_hits = Vec::new();
    let mut substring_hits = Vec::new();

    for summary in summaries {
        let symbol = summary.symbol.to_lowercase();
        let name = summary.name.to_lowercase();

        if symbol.starts_with(&query) {
            prefix_hits.push(summary.clone());
        } else if symbol.contains(&query) || name.contains(&query) {
            substring_hits.push(summary.clone());
        }
    }

    prefix_hits.extend(substring_hits);
    prefix_hits.truncate(limit);
    prefix_hits
}
