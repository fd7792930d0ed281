// Pre-execution hook invoked by the avatar before dispatching a module call
use anchor_lang::prelude::*;
use crate::state::{CallOperation, GuardAccount};

pub fn check_transaction(
    ctx: Context<CheckTransaction>,
    target: Pubkey,
    operation: CallOperation,
    data: Vec<u8>,
) -> Result<()> {
    ctx.accounts
        .guard
        .pre_check(&target, operation, &data)?
        .into_result()
}

#[derive(Accounts)]
pub struct CheckTransaction<'info> {
    /// Guard holding the allow-list for the calling avatar
    pub guard: Account<'info, GuardAccount>,
}
