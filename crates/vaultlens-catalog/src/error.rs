use thiserror::Error;

/// Failures while building the catalog tree.
///
/// Both variants are terminal for the build: dropping the offending record
/// would silently hide inventory from the user, so the caller gets the error
/// and renders a failure state instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("vault {address} references unknown chain id {chain_id}")]
    UnknownChain { chain_id: u64, address: String },
    #[error("vault {address} has unclassifiable api version {raw:?}")]
    UnknownVersion { raw: String, address: String },
}
