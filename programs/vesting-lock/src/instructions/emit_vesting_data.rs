use anchor_lang::prelude::*;

use crate::state::VestingAccount;

pub fn emit_vesting_data(ctx: Context<EmitVestingData>) -> Result<()> {
    let st = &ctx.accounts.vesting_account;
    let now = Clock::get()?.unix_timestamp;
    let releasable = st.releasable(now)?;

    emit!(VestingData {
        vault: st.vault,
        receiver: st.receiver,
        start_date: st.start_date,
        locked_balance: st.locked_balance,
        withdrawn_balance: st.withdrawn_balance,
        cliff_date: st.cliff_date,
        vesting_step: st.vesting_step,
        vesting_amount: st.vesting_amount,
        releasable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingData<'info> {
    #[account(seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,
}

#[event]
pub struct VestingData {
    pub vault: Option<Pubkey>,
    pub receiver: Pubkey,
    pub start_date: i64,
    pub locked_balance: u64,
    pub withdrawn_balance: u64,
    pub cliff_date: i64,
    pub vesting_step: i64,
    pub vesting_amount: u64,
    pub releasable: u64,
}
