// Post-execution audit of the avatar's module and guard wiring
//
// Runs after every guarded execution whether the inner call reported success
// or not. Execution is atomic, so checking the final wiring once is enough; a
// denial here rolls back the whole transaction.
use anchor_lang::prelude::*;
use crate::errors::GuardError;
use crate::policy::{DenyReason, Verdict};

// ================================
// Avatar Interface
// ================================

/// Read-only view of the avatar wiring the auditor depends on
pub trait AvatarWiring {
    /// Whether `module` is currently an enabled module on the avatar
    fn is_module_enabled(&self, module: &Pubkey) -> bool;

    /// Guard currently installed on the avatar (zero address when none)
    fn guard(&self) -> Pubkey;
}

/// Avatar wiring as stored in the avatar account: an 8-byte discriminator
/// followed by this struct in Borsh encoding.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AvatarWiringSnapshot {
    pub guard: Pubkey,
    pub modules: Vec<Pubkey>,
}

impl AvatarWiringSnapshot {
    pub const DISCRIMINATOR_LEN: usize = 8;

    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        let mut body = data
            .get(Self::DISCRIMINATOR_LEN..)
            .ok_or(GuardError::InvalidAvatarData)?;
        <Self as AnchorDeserialize>::deserialize(&mut body)
            .map_err(|_| error!(GuardError::InvalidAvatarData))
    }
}

impl AvatarWiring for AvatarWiringSnapshot {
    fn is_module_enabled(&self, module: &Pubkey) -> bool {
        self.modules.contains(module)
    }

    fn guard(&self) -> Pubkey {
        self.guard
    }
}

// ================================
// Auditor
// ================================

pub struct PostExecutionAuditor<'a> {
    protected_modules: &'a [Pubkey],
    /// Address of the auditing guard instance
    guard: Pubkey,
}

impl<'a> PostExecutionAuditor<'a> {
    pub fn new(protected_modules: &'a [Pubkey], guard: Pubkey) -> Self {
        Self {
            protected_modules,
            guard,
        }
    }

    /// `execution_succeeded` is informational only: the same invariants hold
    /// after a failed execution.
    pub fn audit_after<A>(&self, avatar: &A, execution_succeeded: bool) -> Verdict
    where
        A: AvatarWiring + ?Sized,
    {
        if let Some(module) = self
            .protected_modules
            .iter()
            .find(|module| !avatar.is_module_enabled(module))
        {
            msg!(
                "Protected module {} disabled (execution succeeded: {})",
                module,
                execution_succeeded
            );
            return Verdict::Deny(DenyReason::ProtectedModuleDisabled);
        }

        if avatar.guard() != self.guard {
            msg!(
                "Guard {} detached from avatar, found {} (execution succeeded: {})",
                self.guard,
                avatar.guard(),
                execution_succeeded
            );
            return Verdict::Deny(DenyReason::GuardDetached);
        }

        Verdict::Allow
    }
}
