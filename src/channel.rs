//! Channel naming for the public trades feed.

/// Selection of the trades channel to subscribe to.
///
/// With an instrument name the channel covers that instrument only, e.g.
/// `trades.BTC-PERPETUAL.raw`; otherwise trades are aggregated across all
/// instruments of the given kind and currency, e.g. `trades.future.BTC.100ms`.
#[derive(Debug, Clone)]
pub struct TradesChannel {
    pub instrument_name: Option<String>,
    pub kind: String,
    pub currency: String,
    /// Notification frequency, `raw` or `100ms`.
    pub interval: String,
}

impl Default for TradesChannel {
    fn default() -> Self {
        Self {
            instrument_name: None,
            kind: "future".into(),
            currency: "BTC".into(),
            interval: "100ms".into(),
        }
    }
}

impl TradesChannel {
    /// Channel name as understood by the exchange.
    pub fn name(&self) -> String {
        match &self.instrument_name {
            Some(instrument) => format!("trades.{}.{}", instrument, self.interval),
            None => format!("trades.{}.{}.{}", self.kind, self.currency, self.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channel_is_aggregated_btc_futures() {
        assert_eq!(TradesChannel::default().name(), "trades.future.BTC.100ms");
    }

    #[test]
    fn instrument_name_takes_precedence() {
        let channel = TradesChannel {
            instrument_name: Some("BTC-PERPETUAL".into()),
            interval: "raw".into(),
            ..TradesChannel::default()
        };
        assert_eq!(channel.name(), "trades.BTC-PERPETUAL.raw");
    }

    #[test]
    fn kind_and_currency_form_the_aggregated_channel() {
        let channel = TradesChannel {
            kind: "option".into(),
            currency: "ETH".into(),
            interval: "raw".into(),
            ..TradesChannel::default()
        };
        assert_eq!(channel.name(), "trades.option.ETH.raw");
    }
}
