use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use vaultlens_types::{ApiVersion, Chain};

/// Path of one collapsible node in the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodePath {
    Asset(String),
    Chain(String, Chain),
    Version(String, Chain, ApiVersion),
}

/// Open/closed flags for the whole tree, keyed by node path.
///
/// Nodes default to closed. The host keeps this value across rebuilds, so a
/// search keystroke does not collapse unrelated groups; paths for groups the
/// filter removed stay in the set and are simply never looked up again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandState {
    open: HashSet<NodePath>,
}

impl ExpandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, path: &NodePath) -> bool {
        self.open.contains(path)
    }

    /// Flip one asset header, leaving every other node untouched.
    pub fn toggle_asset(self, asset: &str) -> Self {
        self.toggle(NodePath::Asset(asset.to_string()))
    }

    /// Flip one chain sub-group under `asset`.
    pub fn toggle_chain(self, asset: &str, chain: Chain) -> Self {
        self.toggle(NodePath::Chain(asset.to_string(), chain))
    }

    /// Flip one version sub-group under `(asset, chain)`.
    pub fn toggle_version(self, asset: &str, chain: Chain, version: ApiVersion) -> Self {
        self.toggle(NodePath::Version(asset.to_string(), chain, version))
    }

    fn toggle(mut self, path: NodePath) -> Self {
        if !self.open.remove(&path) {
            self.open.insert(path);
        }
        self
    }
}
