// Owner-gated allow-list administration
use anchor_lang::prelude::*;
use crate::state::{FunctionSelector, GuardAccount};

// ================================
// Instruction Handlers
// ================================

pub fn set_target_allowed(ctx: Context<ManageAllowList>, target: Pubkey, allowed: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.guard.set_target_allowed(&owner, target, allowed)
}

pub fn set_delegate_call_allowed(ctx: Context<ManageAllowList>, target: Pubkey, allowed: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.guard.set_delegate_call_allowed(&owner, target, allowed)
}

pub fn set_function_allow_list_enforced(
    ctx: Context<ManageAllowList>,
    target: Pubkey,
    enforced: bool,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .guard
        .set_function_allow_list_enforced(&owner, target, enforced)
}

pub fn set_fallback_allowed(ctx: Context<ManageAllowList>, target: Pubkey, allowed: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.guard.set_fallback_allowed(&owner, target, allowed)
}

pub fn set_function_allowed(
    ctx: Context<ManageAllowList>,
    target: Pubkey,
    selector: FunctionSelector,
    allowed: bool,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .guard
        .set_function_allowed(&owner, target, selector, allowed)
}

// ================================
// Account Context
// ================================

/// The owner check itself happens in the guard so in-process hosts get the
/// same gate.
#[derive(Accounts)]
pub struct ManageAllowList<'info> {
    /// Guard whose allow-list is changed
    #[account(mut)]
    pub guard: Account<'info, GuardAccount>,

    /// Current owner of the guard
    pub owner: Signer<'info>,
}
