pub mod dto;

use tracing::debug;

use vaultlens_types::{SeriesPoint, VaultRecord};

use dto::{Envelope, RawSeriesPoint, RawVault, TimeseriesPayload, VaultsPayload};

/// Vaults at or below this TVL never reach the catalog (dust positions and
/// test deployments).
pub const MIN_TVL_CLOSE: f64 = 100.0;

/// Decode a raw vault-list response body.
pub fn decode_vaults(body: &str) -> Result<Vec<RawVault>, serde_json::Error> {
    serde_json::from_str::<Envelope<VaultsPayload>>(body).map(|envelope| envelope.data.vaults)
}

/// Decode a raw timeseries response body.
pub fn decode_series(body: &str) -> Result<Vec<RawSeriesPoint>, serde_json::Error> {
    serde_json::from_str::<Envelope<TimeseriesPayload>>(body).map(|envelope| envelope.data.timeseries)
}

/// Project the upstream vault list onto catalog rows.
///
/// Keeps only rows carrying the product flag, drops rows with no usable TVL
/// snapshot, and sorts the remainder by descending TVL so the catalog can
/// group without re-sorting.
pub fn prepare_vaults(raw: Vec<RawVault>) -> Vec<VaultRecord> {
    let total = raw.len();
    let mut records: Vec<VaultRecord> = raw
        .into_iter()
        .filter(|vault| vault.yearn)
        .filter_map(|vault| {
            let tvl_close = vault.tvl.as_ref().and_then(|tvl| tvl.close)?;
            if tvl_close <= MIN_TVL_CLOSE {
                return None;
            }
            Some(VaultRecord {
                address: vault.address,
                name: vault.name,
                asset_name: vault.asset.name,
                chain_id: vault.chain_id,
                api_version: vault.api_version,
                tvl_close,
            })
        })
        .collect();
    records.sort_by(|a, b| b.tvl_close.total_cmp(&a.tvl_close));
    debug!(total, kept = records.len(), "prepared vault list");
    records
}

/// Project a fetched timeseries onto analytics input, preserving the
/// ascending time order the upstream guarantees.
pub fn prepare_series(raw: Vec<RawSeriesPoint>) -> Vec<SeriesPoint> {
    raw.into_iter()
        .map(|point| SeriesPoint {
            time: point.time,
            value: point.value,
        })
        .collect()
}
