// Permission tables consulted by the policy engine
//
// Two keyed tables: per-target flags and per-(target, selector) function
// permissions. Writes are upserts keyed by target (or target + selector), so a
// key never appears twice. Entries are never removed, only flipped to a
// denying state. Owner gating lives in the guard facade, not here.
use anchor_lang::prelude::*;
use crate::errors::GuardError;
use crate::state::types::FunctionSelector;
use crate::{MAX_FUNCTIONS, MAX_TARGETS};

// ================================
// Entries
// ================================

/// Per-target permission flags
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetEntry {
    pub target: Pubkey,
    /// Plain calls to the target are allowed
    pub allowed: bool,
    /// Delegate calls are allowed (only honoured together with `allowed`)
    pub allowed_delegate_call: bool,
    /// Every call must match an allowed function selector
    pub enforce_function_allow_list: bool,
    /// Selector-less calldata passes the function check
    pub allowed_fallback: bool,
}

impl TargetEntry {
    pub const SIZE: usize = 32 + 1 + 1 + 1 + 1;

    pub fn new(target: Pubkey) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn flag(&self, flag: TargetFlag) -> bool {
        match flag {
            TargetFlag::Allowed => self.allowed,
            TargetFlag::DelegateCall => self.allowed_delegate_call,
            TargetFlag::FunctionAllowList => self.enforce_function_allow_list,
            TargetFlag::Fallback => self.allowed_fallback,
        }
    }

    fn flag_mut(&mut self, flag: TargetFlag) -> &mut bool {
        match flag {
            TargetFlag::Allowed => &mut self.allowed,
            TargetFlag::DelegateCall => &mut self.allowed_delegate_call,
            TargetFlag::FunctionAllowList => &mut self.enforce_function_allow_list,
            TargetFlag::Fallback => &mut self.allowed_fallback,
        }
    }
}

/// Selects one of the boolean columns of a [`TargetEntry`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetFlag {
    Allowed,
    DelegateCall,
    FunctionAllowList,
    Fallback,
}

/// Permission for one function selector on one target
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FunctionEntry {
    pub target: Pubkey,
    pub selector: FunctionSelector,
    pub allowed: bool,
}

impl FunctionEntry {
    pub const SIZE: usize = 32 + FunctionSelector::LEN + 1;
}

// ================================
// Allow-list Store
// ================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowListStore {
    pub targets: Vec<TargetEntry>,
    pub functions: Vec<FunctionEntry>,
}

impl AllowListStore {
    /// Serialized size at full capacity
    pub const MAX_SIZE: usize =
        4 + TargetEntry::SIZE * MAX_TARGETS + 4 + FunctionEntry::SIZE * MAX_FUNCTIONS;

    pub fn target(&self, target: &Pubkey) -> Option<&TargetEntry> {
        self.targets.iter().find(|entry| entry.target == *target)
    }

    /// Flag value for a target; unknown targets read as all-false
    pub fn target_flag(&self, target: &Pubkey, flag: TargetFlag) -> bool {
        self.target(target).is_some_and(|entry| entry.flag(flag))
    }

    pub fn is_target_allowed(&self, target: &Pubkey) -> bool {
        self.target_flag(target, TargetFlag::Allowed)
    }

    pub fn is_delegate_call_allowed(&self, target: &Pubkey) -> bool {
        self.target_flag(target, TargetFlag::DelegateCall)
    }

    pub fn is_function_allow_list_enforced(&self, target: &Pubkey) -> bool {
        self.target_flag(target, TargetFlag::FunctionAllowList)
    }

    pub fn is_fallback_allowed(&self, target: &Pubkey) -> bool {
        self.target_flag(target, TargetFlag::Fallback)
    }

    pub fn is_function_allowed(&self, target: &Pubkey, selector: &FunctionSelector) -> bool {
        self.functions
            .iter()
            .any(|entry| entry.target == *target && entry.selector == *selector && entry.allowed)
    }

    /// Upsert a target flag and return its previous value.
    ///
    /// Writing `false` for a target with no entry changes nothing and does not
    /// consume capacity.
    pub fn set_target_flag(&mut self, target: Pubkey, flag: TargetFlag, value: bool) -> Result<bool> {
        if let Some(entry) = self.targets.iter_mut().find(|entry| entry.target == target) {
            let slot = entry.flag_mut(flag);
            let previous = *slot;
            *slot = value;
            return Ok(previous);
        }

        if !value {
            return Ok(false);
        }

        require!(self.targets.len() < MAX_TARGETS, GuardError::AllowListFull);

        let mut entry = TargetEntry::new(target);
        *entry.flag_mut(flag) = true;
        self.targets.push(entry);
        Ok(false)
    }

    /// Upsert a function permission and return its previous value
    pub fn set_function_allowed(
        &mut self,
        target: Pubkey,
        selector: FunctionSelector,
        allowed: bool,
    ) -> Result<bool> {
        if let Some(entry) = self
            .functions
            .iter_mut()
            .find(|entry| entry.target == target && entry.selector == selector)
        {
            let previous = entry.allowed;
            entry.allowed = allowed;
            return Ok(previous);
        }

        if !allowed {
            return Ok(false);
        }

        require!(self.functions.len() < MAX_FUNCTIONS, GuardError::AllowListFull);

        self.functions.push(FunctionEntry {
            target,
            selector,
            allowed,
        });
        Ok(false)
    }
}
