use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn create_vesting(
    ctx: Context<CreateVesting>,
    receiver: Pubkey,
    start_date: i64,
    cliff_date: i64,
    vesting_step: i64,
    vesting_amount: u64,
) -> Result<()> {
    require!(receiver != Pubkey::default(), VestingError::InvalidPubkey);
    require!(start_date >= 0, VestingError::InvalidTimestamp);
    require!(cliff_date >= start_date, VestingError::InvalidTimestamp);
    require!(vesting_step > 0, VestingError::InvalidConfig);
    require!(vesting_amount > 0, VestingError::InvalidConfig);

    let st = &mut ctx.accounts.vesting_account;
    st.vault = None;
    st.receiver = receiver;
    st.start_date = start_date;
    st.locked_balance = 0;
    st.withdrawn_balance = 0;
    st.cliff_date = cliff_date;
    st.vesting_step = vesting_step;
    st.vesting_amount = vesting_amount;

    emit!(VestingCreated {
        receiver,
        start_date,
        cliff_date,
        vesting_step,
        vesting_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateVesting<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + VestingAccount::SIZE,
        seeds = [b"vesting"],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub receiver: Pubkey,
    pub start_date: i64,
    pub cliff_date: i64,
    pub vesting_step: i64,
    pub vesting_amount: u64,
}
