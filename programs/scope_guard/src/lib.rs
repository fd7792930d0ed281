#![allow(deprecated, unexpected_cfgs)]
// Scope guard: a policy layer between an avatar account and the modules it
// lets act on its behalf.
//
// Before dispatch the avatar asks the guard whether a proposed call is allowed
// by the target/function allow-list. After dispatch it asks the guard to audit
// its wiring, so a guarded call can never disable a protected module or detach
// the guard itself. Any denial aborts the whole transaction.
use anchor_lang::prelude::*;

// ================================
// Module Declarations
// ================================

pub mod audit;          // Post-execution wiring audit
pub mod errors;         // Error taxonomy
pub mod events;         // Audit events for administrative changes
pub mod guard;          // Guard facade over the account state
pub mod instructions;   // Instruction handlers and account contexts
pub mod policy;         // Pre-execution policy engine
pub mod state;          // Allow-list and guard account definitions


// ================================
// Public API Exports
// ================================

pub use audit::*;
pub use errors::*;
pub use events::*;
pub use policy::*;
pub use state::*;

// Re-export all instruction items at crate root for Anchor's macro
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;

// ================================
// Program Constants
// ================================

/// PDA seed for guard accounts, combined with the avatar address
pub const GUARD_SEED: &[u8] = b"scope_guard";

/// Maximum number of targets in the allow-list
pub const MAX_TARGETS: usize = 32;

/// Maximum number of (target, selector) permissions
pub const MAX_FUNCTIONS: usize = 64;

/// Maximum number of modules protected from being disabled
pub const MAX_PROTECTED_MODULES: usize = 8;

// ================================
// Program ID Declaration
// ================================

declare_id!("ScopeGuard111111111111111111111111111111111");

// ================================
// Program Instruction Handlers
// ================================

#[program]
pub mod scope_guard {
    use super::*;

    /// Create and activate the guard for an avatar
    pub fn setup(ctx: Context<Setup>, owner: Pubkey, protected_modules: Vec<Pubkey>) -> Result<()> {
        instructions::setup(ctx, owner, protected_modules)
    }

    /// Allow or disallow plain calls to a target
    pub fn set_target_allowed(ctx: Context<ManageAllowList>, target: Pubkey, allowed: bool) -> Result<()> {
        instructions::set_target_allowed(ctx, target, allowed)
    }

    /// Allow or disallow delegate calls to a target
    pub fn set_delegate_call_allowed(
        ctx: Context<ManageAllowList>,
        target: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_delegate_call_allowed(ctx, target, allowed)
    }

    /// Toggle function-level restriction on a target
    pub fn set_function_allow_list_enforced(
        ctx: Context<ManageAllowList>,
        target: Pubkey,
        enforced: bool,
    ) -> Result<()> {
        instructions::set_function_allow_list_enforced(ctx, target, enforced)
    }

    /// Allow or disallow selector-less calldata on a restricted target
    pub fn set_fallback_allowed(ctx: Context<ManageAllowList>, target: Pubkey, allowed: bool) -> Result<()> {
        instructions::set_fallback_allowed(ctx, target, allowed)
    }

    /// Allow or disallow one function selector on a target
    pub fn set_function_allowed(
        ctx: Context<ManageAllowList>,
        target: Pubkey,
        selector: FunctionSelector,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_function_allowed(ctx, target, selector, allowed)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Pre-execution hook
    pub fn check_transaction(
        ctx: Context<CheckTransaction>,
        target: Pubkey,
        operation: CallOperation,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::check_transaction(ctx, target, operation, data)
    }

    /// Post-execution hook
    pub fn check_after_execution(ctx: Context<CheckAfterExecution>, execution_succeeded: bool) -> Result<()> {
        instructions::check_after_execution(ctx, execution_succeeded)
    }
}
