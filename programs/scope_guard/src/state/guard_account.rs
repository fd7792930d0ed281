// Guard account: one per protected avatar
use anchor_lang::prelude::*;
use crate::state::allow_list::AllowListStore;
use crate::MAX_PROTECTED_MODULES;

/// Configuration fixed at setup plus the mutable allow-list
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Sole address allowed to mutate the allow-list or hand over ownership
    pub owner: Pubkey,
    /// Account this guard protects. Never reassigned after setup.
    pub avatar: Pubkey,
    /// Modules that must stay enabled on the avatar. Never changes after setup.
    pub protected_modules: Vec<Pubkey>,
    pub allow_list: AllowListStore,
}

impl GuardConfig {
    pub const MAX_SIZE: usize =
        32 + 32 + 4 + 32 * MAX_PROTECTED_MODULES + AllowListStore::MAX_SIZE;
}

/// Guard lifecycle. Setup moves `Uninitialized` to `Active` exactly once and
/// there is no way back.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardLifecycle {
    #[default]
    Uninitialized,
    Active(GuardConfig),
}

#[account]
#[derive(Debug, Default)]
pub struct GuardAccount {
    pub lifecycle: GuardLifecycle,
    /// PDA bump seed
    pub bump: u8,
}

impl GuardAccount {
    /// Account size including the discriminator, at full capacity
    pub const fn space() -> usize {
        8 + // discriminator
        1 + GuardConfig::MAX_SIZE + // lifecycle tag + active config
        1 // bump
    }
}
