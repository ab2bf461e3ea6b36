pub mod error;
pub mod selection;
pub mod state;
pub mod tree;

pub use error::CatalogError;
pub use selection::{Selection, SelectionEffect};
pub use state::{ExpandState, NodePath};
pub use tree::{AssetGroup, ChainGroup, VersionGroup, build};
