use serde::{Deserialize, Serialize};

use vaultlens_types::VaultKey;

/// Generic envelope around a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of the vault-list query response.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultsPayload {
    pub vaults: Vec<RawVault>,
}

/// One vault row exactly as the upstream indexer ships it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVault {
    #[serde(default)]
    pub yearn: bool,
    pub name: String,
    pub chain_id: u64,
    pub address: String,
    pub asset: RawAsset,
    pub api_version: String,
    #[serde(default)]
    pub tvl: Option<RawTvl>,
    #[serde(default)]
    pub price_per_share: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAsset {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTvl {
    #[serde(default)]
    pub block_time: Option<String>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Body of the timeseries query response.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeseriesPayload {
    pub timeseries: Vec<RawSeriesPoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeriesPoint {
    pub chain_id: u64,
    pub address: String,
    pub label: String,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    pub time: i64,
    pub value: f64,
}

/// Query coordinate for one instrument's yield series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRequest {
    pub chain_id: u64,
    pub address: String,
    pub label: String,
    pub component: String,
    pub limit: u32,
}

impl SeriesRequest {
    /// Backward price-per-share APY netted weekly, the series the dashboard
    /// charts by default.
    pub fn weekly_net_apy(key: &VaultKey) -> Self {
        Self {
            chain_id: key.chain_id,
            address: key.address.clone(),
            label: "apy-bwd-delta-pps".to_string(),
            component: "weeklyNet".to_string(),
            limit: 1000,
        }
    }
}
