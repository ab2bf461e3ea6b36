use serde::{Deserialize, Serialize};

use vaultlens_types::{VaultKey, VaultRecord};

/// What the host must do after a selection, beyond swapping the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    None,
    /// The collapsible side panel was open at click time and should close.
    ClosePanel,
}

/// Tracks the single active vault in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    active: Option<VaultKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn active(&self) -> Option<&VaultKey> {
        self.active.as_ref()
    }

    pub fn is_active(&self, vault: &VaultRecord) -> bool {
        self.active
            .as_ref()
            .is_some_and(|key| key.matches(vault.chain_id, &vault.address))
    }

    /// Activate `vault`, replacing any previous selection. Returns the new
    /// state plus the panel signal for the host.
    pub fn select(self, vault: &VaultRecord, panel_open: bool) -> (Self, SelectionEffect) {
        let effect = if panel_open {
            SelectionEffect::ClosePanel
        } else {
            SelectionEffect::None
        };
        (
            Self {
                active: Some(VaultKey::from(vault)),
            },
            effect,
        )
    }
}
