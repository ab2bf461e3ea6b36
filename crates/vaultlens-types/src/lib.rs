pub mod chain;
pub mod series;
pub mod vault;
pub mod version;

pub use chain::Chain;
pub use series::{Horizon, SeriesPoint};
pub use vault::{VaultKey, VaultRecord};
pub use version::ApiVersion;
