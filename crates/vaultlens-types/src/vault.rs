use serde::{Deserialize, Serialize};

/// One catalog row, as delivered by the feed layer.
///
/// `address` is an opaque identifier, unique within a chain and compared
/// case-insensitively everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub address: String,
    pub name: String,
    pub asset_name: String,
    pub chain_id: u64,
    pub api_version: String,
    pub tvl_close: f64,
}

/// The `(chain, address)` coordinate handed to the series fetcher after a
/// sidebar selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultKey {
    pub chain_id: u64,
    pub address: String,
}

impl VaultKey {
    pub fn matches(&self, chain_id: u64, address: &str) -> bool {
        self.chain_id == chain_id && self.address.eq_ignore_ascii_case(address)
    }
}

impl PartialEq for VaultKey {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.chain_id, &other.address)
    }
}

impl Eq for VaultKey {}

impl From<&VaultRecord> for VaultKey {
    fn from(vault: &VaultRecord) -> Self {
        Self {
            chain_id: vault.chain_id,
            address: vault.address.clone(),
        }
    }
}
