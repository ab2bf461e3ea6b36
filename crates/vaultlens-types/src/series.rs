use serde::{Deserialize, Serialize};

/// One raw sample of the yield series: unix seconds plus a fractional rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: i64,
    pub value: f64,
}

/// Lookback selection for the analytics window.
///
/// Horizons count trailing samples, not calendar days: upstream spacing is
/// roughly daily but not guaranteed uniform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "180d")]
    SixMonths,
    #[serde(rename = "max")]
    Max,
    #[serde(untagged)]
    Custom(usize),
}

impl Horizon {
    /// Number of trailing points to keep, or `None` for the whole series.
    pub const fn to_points(&self) -> Option<usize> {
        match self {
            Self::SevenDays => Some(7),
            Self::ThirtyDays => Some(30),
            Self::SixMonths => Some(180),
            Self::Max => None,
            Self::Custom(n) => Some(*n),
        }
    }
}
