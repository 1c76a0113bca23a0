//! Entry Flow Configuration

use serde::{Deserialize, Serialize};
use vibe_auth::HttpAuthBackend;
use vibe_market_data::HttpStockSource;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Route requested after a successful submission
    pub landing_route: String,
    /// Remote service endpoints
    pub gateway: GatewayConfig,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            landing_route: "/".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub auth_url: String,
    pub market_data_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            auth_url: "https://auth.vibemarket.io".to_string(),
            market_data_url: "https://data.vibemarket.io".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn auth_backend(&self) -> HttpAuthBackend {
        HttpAuthBackend::new(&self.auth_url)
    }

    pub fn stock_source(&self) -> HttpStockSource {
        HttpStockSource::new(&self.market_data_url)
    }
}
