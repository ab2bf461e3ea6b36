use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use vaultlens_types::{ApiVersion, Chain, VaultRecord};

use crate::error::CatalogError;

/// Top grouping level: one entry per underlying asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetGroup {
    pub asset: String,
    pub chains: Vec<ChainGroup>,
}

/// Vaults of one asset on one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainGroup {
    pub chain: Chain,
    pub versions: Vec<VersionGroup>,
}

/// Vaults of one generation within a chain group, largest TVL first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionGroup {
    pub version: ApiVersion,
    pub vaults: Vec<VaultRecord>,
}

impl AssetGroup {
    /// Every leaf under this asset, in render order.
    pub fn vaults(&self) -> impl Iterator<Item = &VaultRecord> {
        self.chains
            .iter()
            .flat_map(|chain| chain.versions.iter())
            .flat_map(|version| version.vaults.iter())
    }

    /// Largest vault under this asset; drives the asset-level ordering.
    pub fn max_tvl(&self) -> f64 {
        self.vaults().map(|vault| vault.tvl_close).fold(0.0, f64::max)
    }
}

/// Build the sidebar tree for the given search term.
///
/// Every record is classified up front, whether or not the filter keeps it:
/// a record with an unknown chain id or an unclassifiable api version fails
/// the whole build, so a rendered catalog is never silently missing
/// inventory.
pub fn build(records: &[VaultRecord], search_term: &str) -> Result<Vec<AssetGroup>, CatalogError> {
    let needle = search_term.to_lowercase();

    let mut asset_order: Vec<String> = Vec::new();
    let mut rows_by_asset: HashMap<String, Vec<(&VaultRecord, Chain, ApiVersion)>> = HashMap::new();

    for record in records {
        let chain = Chain::from_id(record.chain_id).ok_or_else(|| CatalogError::UnknownChain {
            chain_id: record.chain_id,
            address: record.address.clone(),
        })?;
        let version = ApiVersion::classify(&record.api_version);
        if version == ApiVersion::Unknown {
            return Err(CatalogError::UnknownVersion {
                raw: record.api_version.clone(),
                address: record.address.clone(),
            });
        }
        if !matches_term(record, &needle) {
            continue;
        }
        rows_by_asset
            .entry(record.asset_name.clone())
            .or_insert_with(|| {
                asset_order.push(record.asset_name.clone());
                Vec::new()
            })
            .push((record, chain, version));
    }

    let mut groups: Vec<AssetGroup> = asset_order
        .into_iter()
        .map(|asset| {
            let rows = rows_by_asset.remove(&asset).unwrap_or_default();
            AssetGroup {
                chains: build_chains(rows),
                asset,
            }
        })
        .collect();

    // Asset headers render largest-first, like the flat list they replace.
    groups.sort_by(|a, b| b.max_tvl().total_cmp(&a.max_tvl()));

    debug!(
        records = records.len(),
        assets = groups.len(),
        "built catalog tree"
    );
    Ok(groups)
}

fn build_chains(rows: Vec<(&VaultRecord, Chain, ApiVersion)>) -> Vec<ChainGroup> {
    let mut rows_by_chain: HashMap<Chain, Vec<(&VaultRecord, ApiVersion)>> = HashMap::new();
    for (record, chain, version) in rows {
        rows_by_chain.entry(chain).or_default().push((record, version));
    }

    let mut chains: Vec<Chain> = rows_by_chain.keys().copied().collect();
    chains.sort();

    chains
        .into_iter()
        .map(|chain| {
            let rows = rows_by_chain.remove(&chain).unwrap_or_default();
            ChainGroup {
                chain,
                versions: build_versions(rows),
            }
        })
        .collect()
}

fn build_versions(rows: Vec<(&VaultRecord, ApiVersion)>) -> Vec<VersionGroup> {
    let mut version_order: Vec<ApiVersion> = Vec::new();
    let mut rows_by_version: HashMap<ApiVersion, Vec<&VaultRecord>> = HashMap::new();
    for (record, version) in rows {
        rows_by_version
            .entry(version)
            .or_insert_with(|| {
                version_order.push(version);
                Vec::new()
            })
            .push(record);
    }

    // Stable sort: v3 first, everything else keeps encounter order.
    version_order.sort_by_key(|version| version.display_rank());

    version_order
        .into_iter()
        .map(|version| {
            let mut vaults: Vec<VaultRecord> = rows_by_version
                .remove(&version)
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect();
            vaults.sort_by(|a, b| b.tvl_close.total_cmp(&a.tvl_close));
            VersionGroup { version, vaults }
        })
        .collect()
}

fn matches_term(record: &VaultRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.address.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(
        address: &str,
        name: &str,
        asset: &str,
        chain_id: u64,
        api_version: &str,
        tvl_close: f64,
    ) -> VaultRecord {
        VaultRecord {
            address: address.to_string(),
            name: name.to_string(),
            asset_name: asset.to_string(),
            chain_id,
            api_version: api_version.to_string(),
            tvl_close,
        }
    }

    #[test]
    fn test_groups_by_asset_chain_and_version() {
        let records = vec![
            vault("0xA", "Vault A", "USDC", 1, "3.0.1", 500.0),
            vault("0xB", "Vault B", "USDC", 10, "0.4.3", 900.0),
        ];

        let groups = build(&records, "").unwrap();
        assert_eq!(groups.len(), 1);

        let usdc = &groups[0];
        assert_eq!(usdc.asset, "USDC");
        assert_eq!(usdc.chains.len(), 2);

        let mainnet = &usdc.chains[0];
        assert_eq!(mainnet.chain, Chain::Mainnet);
        assert_eq!(mainnet.versions.len(), 1);
        assert_eq!(mainnet.versions[0].version, ApiVersion::V3);
        assert_eq!(mainnet.versions[0].vaults[0].address, "0xA");

        let optimism = &usdc.chains[1];
        assert_eq!(optimism.chain, Chain::Optimism);
        assert_eq!(optimism.versions[0].version, ApiVersion::V2);
        assert_eq!(optimism.versions[0].vaults[0].address, "0xB");
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let records = vec![
            vault("0x1", "yvUSDC", "USDC", 1, "3.0.1", 500.0),
            vault("0x2", "yvDAI", "DAI", 1, "3.0.1", 400.0),
            vault("0x3", "staked USDC", "USDC", 10, "0.4.3", 300.0),
        ];

        let groups = build(&records, "usdc").unwrap();
        let leaves: Vec<&VaultRecord> = groups.iter().flat_map(AssetGroup::vaults).collect();

        // Every leaf matches, every matching record appears exactly once.
        assert_eq!(leaves.len(), 2);
        for leaf in &leaves {
            assert!(leaf.name.to_lowercase().contains("usdc"));
        }
        assert!(leaves.iter().any(|leaf| leaf.address == "0x1"));
        assert!(leaves.iter().any(|leaf| leaf.address == "0x3"));
    }

    #[test]
    fn test_filter_matches_address_case_insensitively() {
        let records = vec![
            vault("0xAbCdEf", "Vault A", "USDC", 1, "3.0.1", 500.0),
            vault("0x123456", "Vault B", "USDC", 1, "3.0.1", 400.0),
        ];

        let groups = build(&records, "ABCD").unwrap();
        let leaves: Vec<&VaultRecord> = groups.iter().flat_map(AssetGroup::vaults).collect();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].address, "0xAbCdEf");
    }

    #[test]
    fn test_emptied_asset_groups_are_dropped() {
        let records = vec![
            vault("0x1", "yvUSDC", "USDC", 1, "3.0.1", 500.0),
            vault("0x2", "yvDAI", "DAI", 1, "3.0.1", 400.0),
        ];

        let groups = build(&records, "dai").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].asset, "DAI");
    }

    #[test]
    fn test_asset_order_follows_max_tvl() {
        let records = vec![
            vault("0x1", "small", "DAI", 1, "3.0.1", 200.0),
            vault("0x2", "mid", "WETH", 1, "3.0.1", 800.0),
            vault("0x3", "large", "USDC", 1, "3.0.1", 900.0),
            vault("0x4", "tiny", "USDC", 10, "0.4.3", 150.0),
        ];

        let groups = build(&records, "").unwrap();
        let tvls: Vec<f64> = groups.iter().map(AssetGroup::max_tvl).collect();
        for pair in tvls.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(groups[0].asset, "USDC");
        assert_eq!(groups[1].asset, "WETH");
        assert_eq!(groups[2].asset, "DAI");
    }

    #[test]
    fn test_v3_groups_render_before_v2() {
        let records = vec![
            vault("0x1", "legacy", "USDC", 1, "0.4.3", 900.0),
            vault("0x2", "current", "USDC", 1, "3.0.1", 500.0),
        ];

        let groups = build(&records, "").unwrap();
        let versions = &groups[0].chains[0].versions;
        assert_eq!(versions[0].version, ApiVersion::V3);
        assert_eq!(versions[1].version, ApiVersion::V2);
    }

    #[test]
    fn test_leaves_sorted_by_descending_tvl() {
        let records = vec![
            vault("0x1", "a", "USDC", 1, "3.0.1", 300.0),
            vault("0x2", "b", "USDC", 1, "3.0.1", 700.0),
            vault("0x3", "c", "USDC", 1, "3.0.1", 500.0),
        ];

        let groups = build(&records, "").unwrap();
        let vaults = &groups[0].chains[0].versions[0].vaults;
        let order: Vec<&str> = vaults.iter().map(|v| v.address.as_str()).collect();
        assert_eq!(order, vec!["0x2", "0x3", "0x1"]);
    }

    #[test]
    fn test_unknown_chain_fails_build() {
        let records = vec![vault("0x1", "a", "USDC", 56, "3.0.1", 300.0)];
        assert_eq!(
            build(&records, ""),
            Err(CatalogError::UnknownChain {
                chain_id: 56,
                address: "0x1".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_version_fails_build() {
        let records = vec![vault("0x1", "a", "USDC", 1, "2.0.0", 300.0)];
        assert_eq!(
            build(&records, ""),
            Err(CatalogError::UnknownVersion {
                raw: "2.0.0".to_string(),
                address: "0x1".to_string()
            })
        );
    }

    #[test]
    fn test_validation_covers_filtered_out_records() {
        // The bad record does not match the term, but the build still fails:
        // classification happens before filtering.
        let records = vec![
            vault("0x1", "yvUSDC", "USDC", 1, "3.0.1", 500.0),
            vault("0x2", "yvDAI", "DAI", 56, "3.0.1", 400.0),
        ];
        assert!(matches!(
            build(&records, "usdc"),
            Err(CatalogError::UnknownChain { chain_id: 56, .. })
        ));
    }
}
