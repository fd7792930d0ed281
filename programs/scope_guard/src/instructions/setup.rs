// One-time guard setup for an avatar
use anchor_lang::prelude::*;
use crate::state::GuardAccount;
use crate::GUARD_SEED;

// ================================
// Instruction Handler
// ================================

/// Create the guard account for `avatar` and activate it
pub fn setup(ctx: Context<Setup>, owner: Pubkey, protected_modules: Vec<Pubkey>) -> Result<()> {
    let avatar = ctx.accounts.avatar.key();
    let guard = &mut ctx.accounts.guard;
    guard.bump = ctx.bumps.guard;
    guard.setup(owner, avatar, &protected_modules)
}

// ================================
// Account Context
// ================================

#[derive(Accounts)]
pub struct Setup<'info> {
    /// Guard account, one per avatar
    #[account(
        init,
        payer = payer,
        space = GuardAccount::space(),
        seeds = [GUARD_SEED, avatar.key().as_ref()],
        bump
    )]
    pub guard: Account<'info, GuardAccount>,

    /// Avatar being guarded, must sign
    pub avatar: Signer<'info>,

    /// Rent payer for the guard account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}
