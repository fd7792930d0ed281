use anchor_lang::prelude::*;

// ================================
// Guard Events
// ================================

/// Emitted once when the guard transitions to active
#[event]
pub struct GuardSetUp {
    pub owner: Pubkey,
    pub avatar: Pubkey,
    pub protected_modules: Vec<Pubkey>,
}

// Allow-list transitions record the previous and the new value

#[event]
pub struct TargetAllowedSet {
    pub target: Pubkey,
    pub previous: bool,
    pub allowed: bool,
}

#[event]
pub struct DelegateCallAllowedSet {
    pub target: Pubkey,
    pub previous: bool,
    pub allowed: bool,
}

#[event]
pub struct FunctionAllowListEnforcedSet {
    pub target: Pubkey,
    pub previous: bool,
    pub enforced: bool,
}

#[event]
pub struct FallbackAllowedSet {
    pub target: Pubkey,
    pub previous: bool,
    pub allowed: bool,
}

#[event]
pub struct FunctionAllowedSet {
    pub target: Pubkey,
    pub selector: [u8; 4],
    pub previous: bool,
    pub allowed: bool,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
