//! Shared data structures used throughout the application.

use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// RPC method for channel subscriptions.
pub const SUBSCRIBE_METHOD: &str = "public/subscribe";

/// Correlation id for the subscription request. The server echoes it back
/// in the acknowledgement; nothing on this side correlates on it.
pub const SUBSCRIBE_REQUEST_ID: u64 = 42;

/// JSON-RPC 2.0 subscription request, sent once per connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub jsonrpc: String,
    pub method: String,
    pub id: u64,
    pub params: SubscribeParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeParams {
    pub channels: Vec<String>,
}

impl SubscribeRequest {
    /// Build the subscription request for a single channel.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: SUBSCRIBE_METHOD.into(),
            id: SUBSCRIBE_REQUEST_ID,
            params: SubscribeParams {
                channels: vec![channel.into()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subscribe_request_matches_wire_shape() {
        let request = SubscribeRequest::new("trades.future.BTC.100ms");
        let text = serde_json::to_string(&request).expect("request should serialize");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json should parse");
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "public/subscribe",
                "id": 42,
                "params": { "channels": ["trades.future.BTC.100ms"] }
            })
        );
    }

    #[test]
    fn subscribe_request_round_trips_losslessly() {
        let request = SubscribeRequest::new("trades.ETH-PERPETUAL.raw");
        let text = serde_json::to_string(&request).expect("request should serialize");
        let back: SubscribeRequest = serde_json::from_str(&text).expect("json should parse");
        assert_eq!(back, request);
    }
}
