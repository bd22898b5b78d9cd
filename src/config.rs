//! Configuration loader and application settings.

use crate::channel::TradesChannel;

/// Test environment host.
pub const TESTNET_HOST: &str = "test.deribit.com";

/// Production host.
pub const MAINNET_HOST: &str = "www.deribit.com";

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// WebSocket endpoint for the public JSON-RPC API.
    pub ws_url: String,
    /// Trades channel to subscribe to.
    pub channel: TradesChannel,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; an empty environment yields the testnet
    /// endpoint and the aggregated BTC futures channel. Set `WS_URL` to
    /// override the endpoint entirely, or `TESTNET=0` to target production.
    pub fn load() -> Self {
        let ws_url = std::env::var("WS_URL").unwrap_or_else(|_| {
            let host = match std::env::var("TESTNET").as_deref() {
                Ok("0") => MAINNET_HOST,
                _ => TESTNET_HOST,
            };
            websocket_url(host)
        });

        let defaults = TradesChannel::default();
        let channel = TradesChannel {
            instrument_name: std::env::var("INSTRUMENT").ok(),
            kind: std::env::var("KIND").unwrap_or(defaults.kind),
            currency: std::env::var("CURRENCY").unwrap_or(defaults.currency),
            interval: std::env::var("INTERVAL").unwrap_or(defaults.interval),
        };

        Self { ws_url, channel }
    }
}

/// WebSocket URL for the given API host.
pub fn websocket_url(host: &str) -> String {
    format!("wss://{host}/ws/api/v2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn websocket_url_for_testnet_host() {
        assert_eq!(
            websocket_url(TESTNET_HOST),
            "wss://test.deribit.com/ws/api/v2"
        );
    }

    #[test]
    fn websocket_url_for_mainnet_host() {
        assert_eq!(
            websocket_url(MAINNET_HOST),
            "wss://www.deribit.com/ws/api/v2"
        );
    }
}
