use anchor_lang::prelude::*;
use crate::state::GuardAccount;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.guard.transfer_ownership(&owner, new_owner)
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// Guard being handed over
    #[account(mut)]
    pub guard: Account<'info, GuardAccount>,

    /// Current owner
    pub owner: Signer<'info>,
}
