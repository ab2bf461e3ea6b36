use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Networks the dashboard knows how to display.
///
/// Variants are declared in ascending chain-id order, so the derived `Ord`
/// matches the numeric ordering of the ids.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Chain {
    Mainnet,
    Optimism,
    GnosisChain,
    Polygon,
    Fantom,
    Base,
    Arbitrum,
}

impl Chain {
    /// Resolve a numeric chain id against the known-network table.
    ///
    /// Ids outside the table come from bad upstream data; callers turn the
    /// `None` into a typed error rather than skipping the record.
    pub const fn from_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Mainnet),
            10 => Some(Self::Optimism),
            100 => Some(Self::GnosisChain),
            137 => Some(Self::Polygon),
            250 => Some(Self::Fantom),
            8453 => Some(Self::Base),
            42161 => Some(Self::Arbitrum),
            _ => None,
        }
    }

    pub const fn id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Optimism => 10,
            Self::GnosisChain => 100,
            Self::Polygon => 137,
            Self::Fantom => 250,
            Self::Base => 8453,
            Self::Arbitrum => 42161,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Chain; 7] = [
        Chain::Mainnet,
        Chain::Optimism,
        Chain::GnosisChain,
        Chain::Polygon,
        Chain::Fantom,
        Chain::Base,
        Chain::Arbitrum,
    ];

    #[test]
    fn test_id_round_trips_through_table() {
        for chain in ALL {
            assert_eq!(Chain::from_id(chain.id()), Some(chain));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert_eq!(Chain::from_id(0), None);
        assert_eq!(Chain::from_id(56), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Chain::Mainnet.to_string(), "Mainnet");
        assert_eq!(Chain::GnosisChain.to_string(), "GnosisChain");
    }

    #[test]
    fn test_ord_follows_chain_id() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].id() < pair[1].id());
        }
    }
}
