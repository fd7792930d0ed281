// Pre-execution policy evaluation
//
// Checks run in a fixed order and stop at the first failure:
//   0. calls into the guard program itself are never allowed
//   1. delegate calls need both the target and its delegate-call permission
//   2. plain calls need the target permission
//   3. targets enforcing a function allow-list need an allowed selector
// Function-level checks only run once the coarser target gate has passed, and
// they add to it rather than replace it.
use anchor_lang::prelude::*;
use crate::errors::GuardError;
use crate::state::{AllowListStore, CallOperation, FunctionSelector};

// ================================
// Verdict
// ================================

/// Why a call or an execution was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    TargetNotAllowed,
    DelegateCallNotAllowed,
    FunctionNotAllowed,
    ProtectedModuleDisabled,
    GuardDetached,
    GuardTargeted,
}

impl From<DenyReason> for GuardError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::TargetNotAllowed => GuardError::TargetNotAllowed,
            DenyReason::DelegateCallNotAllowed => GuardError::DelegateCallNotAllowed,
            DenyReason::FunctionNotAllowed => GuardError::FunctionNotAllowed,
            DenyReason::ProtectedModuleDisabled => GuardError::ProtectedModuleDisabled,
            DenyReason::GuardDetached => GuardError::GuardDetached,
            DenyReason::GuardTargeted => GuardError::GuardTargeted,
        }
    }
}

/// Outcome of a guard check. The host aborts the whole operation on `Deny`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(DenyReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Verdict::Allow => None,
            Verdict::Deny(reason) => Some(*reason),
        }
    }

    /// Turn a denial into the matching program error
    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(reason) => Err(GuardError::from(reason).into()),
        }
    }
}

// ================================
// Policy Engine
// ================================

/// Read-only evaluator over an allow-list
pub struct PolicyEngine<'a> {
    allow_list: &'a AllowListStore,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(allow_list: &'a AllowListStore) -> Self {
        Self { allow_list }
    }

    pub fn evaluate(&self, target: &Pubkey, operation: CallOperation, data: &[u8]) -> Verdict {
        // Guarded calls must not reach guard administration
        if *target == crate::ID {
            return Verdict::Deny(DenyReason::GuardTargeted);
        }

        let Some(entry) = self.allow_list.target(target) else {
            return Verdict::Deny(if operation.is_delegate_call() {
                DenyReason::DelegateCallNotAllowed
            } else {
                DenyReason::TargetNotAllowed
            });
        };

        match operation {
            CallOperation::DelegateCall if !(entry.allowed && entry.allowed_delegate_call) => {
                return Verdict::Deny(DenyReason::DelegateCallNotAllowed);
            }
            CallOperation::Call if !entry.allowed => {
                return Verdict::Deny(DenyReason::TargetNotAllowed);
            }
            _ => {}
        }

        if entry.enforce_function_allow_list {
            let function_allowed = match FunctionSelector::from_calldata(data) {
                Some(selector) => self.allow_list.is_function_allowed(target, &selector),
                None if data.is_empty() => entry.allowed_fallback,
                // Truncated selector
                None => false,
            };
            if !function_allowed {
                return Verdict::Deny(DenyReason::FunctionNotAllowed);
            }
        }

        Verdict::Allow
    }
}
