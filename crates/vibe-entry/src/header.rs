//! Header Bootstrap
//!
//! Mounts the page header: one stock-summary prefetch whose result is shared,
//! unmutated, by the nav search widget and the user-menu widget. A failed
//! prefetch degrades to an empty set; the header itself always renders.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vibe_market_data::{search_summaries, StockDataSource, StockSummary};

/// Signed-in user, injected by the host rather than read from ambient state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Search widget in the navigation bar
pub struct NavSearch {
    stocks: Arc<[StockSummary]>,
}

impl NavSearch {
    fn new(stocks: Arc<[StockSummary]>) -> Self {
        Self { stocks }
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<StockSummary> {
        search_summaries(&self.stocks, query, limit)
    }

    pub fn summaries(&self) -> &[StockSummary] {
        &self.stocks
    }
}

/// User dropdown with its own search surface
pub struct UserMenu {
    user: SessionUser,
    stocks: Arc<[StockSummary]>,
}

impl UserMenu {
    fn new(user: SessionUser, stocks: Arc<[StockSummary]>) -> Self {
        Self { user, stocks }
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<StockSummary> {
        search_summaries(&self.stocks, query, limit)
    }

    pub fn summaries(&self) -> &[StockSummary] {
        &self.stocks
    }
}

/// Mounted page header
pub struct Header {
    nav: NavSearch,
    user_menu: UserMenu,
}

impl Header {
    /// Mount the header for one render.
    ///
    /// Performs exactly one fetch and hands the same summary set to both
    /// widgets; neither fetches independently, and the set is not cached
    /// across renders.
    pub async fn mount(user: SessionUser, source: &dyn StockDataSource) -> Self {
        let stocks: Arc<[StockSummary]> = match source.fetch_stock_summaries().await {
            Ok(summaries) => {
                debug!(count = summaries.len(), "stock summaries prefetched");
                Arc::from(summaries)
            }
            Err(e) => {
                warn!(error = %e, "stock prefetch failed, search renders empty");
                Arc::from(Vec::new())
            }
        };

        Self {
            nav: NavSearch::new(Arc::clone(&stocks)),
            user_menu: UserMenu::new(user, stocks),
        }
    }

    pub fn nav(&self) -> &NavSearch {
        &self.nav
    }

    pub fn user_menu(&self) -> &UserMenu {
        &self.user_menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vibe_market_data::{MarketDataError, StaticStockSource};

    fn user() -> SessionUser {
        SessionUser {
            id: "u-1".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@site.com".to_string(),
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
        inner: StaticStockSource,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                inner: StaticStockSource::seeded(),
            }
        }
    }

    #[async_trait]
    impl StockDataSource for CountingSource {
        async fn fetch_stock_summaries(&self) -> vibe_market_data::Result<Vec<StockSummary>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_stock_summaries().await
        }
    }

    struct FailingSource;

    #[async_trait]
    impl StockDataSource for FailingSource {
        async fn fetch_stock_summaries(&self) -> vibe_market_data::Result<Vec<StockSummary>> {
            Err(MarketDataError::Network("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_single_fetch_shared_by_both_widgets() {
        let source = CountingSource::new();
        let header = Header::mount(user(), &source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(header.nav().summaries(), header.user_menu().summaries());
        assert_eq!(header.nav().summaries().len(), 10);
    }

    #[tokio::test]
    async fn test_both_widgets_search_same_data() {
        let source = CountingSource::new();
        let header = Header::mount(user(), &source).await;

        let from_nav = header.nav().search("apple", 5);
        let from_menu = header.user_menu().search("apple", 5);
        assert_eq!(from_nav, from_menu);
        assert_eq!(from_nav[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_failed_prefetch_degrades_to_empty() {
        let header = Header::mount(user(), &FailingSource).await;

        // Header still renders: user is present, both widgets just have no
        // suggestions.
        assert_eq!(header.user_menu().user().name, "Jane Doe");
        assert!(header.nav().summaries().is_empty());
        assert!(header.user_menu().summaries().is_empty());
        assert!(header.nav().search("AAPL", 5).is_empty());
    }

    #[tokio::test]
    async fn test_renders_are_independent() {
        let source = CountingSource::new();
        let _first = Header::mount(user(), &source).await;
        let _second = Header::mount(user(), &source).await;

        // No caching across renders: each mount fetches.
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
