use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Coarse vault generation, bucketed from the free-form `apiVersion` string.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V2,
    V3,
    Unknown,
}

impl ApiVersion {
    /// "0.x" lineages are v2 vaults, "3.x" are v3. Anything else is
    /// unclassifiable and treated as a data-integrity signal by the catalog.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with('0') {
            Self::V2
        } else if raw.starts_with('3') {
            Self::V3
        } else {
            Self::Unknown
        }
    }

    /// Route fragment the host navigates to when a vault of this generation
    /// is selected.
    pub const fn route_prefix(&self) -> &'static str {
        match self {
            Self::V2 => "vaults",
            Self::V3 => "v3",
            Self::Unknown => "",
        }
    }

    /// V3 groups render first; everything else keeps encounter order under a
    /// stable sort.
    pub const fn display_rank(&self) -> u8 {
        match self {
            Self::V3 => 0,
            Self::V2 | Self::Unknown => 1,
        }
    }
}
