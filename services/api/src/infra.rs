use airline_market::analyst::MarketAnalyst;
use airline_market::config::MarketConfig;
use airline_market::market::City;
use chrono::{Duration, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) analyst: Arc<dyn MarketAnalyst>,
    pub(crate) market: MarketConfig,
}

/// Sleeps for the configured artificial latency, if any. Purely cosmetic.
pub(crate) async fn simulate_latency(market: &MarketConfig) {
    if let Some(delay) = market.simulated_latency() {
        debug!(delay_ms = delay.as_millis() as u64, "simulating upstream latency");
        tokio::time::sleep(delay).await;
    }
}

/// Route reports default to a departure one week out.
pub(crate) fn default_travel_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(7)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_city(raw: &str) -> Result<City, String> {
    raw.parse::<City>().map_err(|err| err.to_string())
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

pub(crate) fn deserialize_city<'de, D>(deserializer: D) -> Result<City, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_city(&raw).map_err(serde::de::Error::custom)
}
