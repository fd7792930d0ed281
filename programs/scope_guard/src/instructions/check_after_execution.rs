// Post-execution hook invoked by the avatar after a module call was dispatched
use anchor_lang::prelude::*;
use crate::state::GuardAccount;

pub fn check_after_execution(ctx: Context<CheckAfterExecution>, execution_succeeded: bool) -> Result<()> {
    let guard = &ctx.accounts.guard;
    let avatar = &ctx.accounts.avatar;
    let data = avatar.try_borrow_data()?;

    guard
        .audit_avatar_account(&guard.key(), &avatar.key(), &data[..], execution_succeeded)?
        .into_result()
}

#[derive(Accounts)]
pub struct CheckAfterExecution<'info> {
    /// Guard auditing the avatar
    pub guard: Account<'info, GuardAccount>,

    /// CHECK: address is matched against the bound avatar and the data is
    /// decoded as avatar wiring by the guard
    pub avatar: UncheckedAccount<'info>,
}
