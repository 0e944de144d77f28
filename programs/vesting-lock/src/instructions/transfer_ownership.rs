use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn transfer_ownership(
    ctx: Context<TransferOwnership>,
    query_id: u64,
    new_receiver: Pubkey,
) -> Result<()> {
    require!(new_receiver != Pubkey::default(), VestingError::InvalidPubkey);

    let st = &mut ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.receiver.key(),
        st.receiver,
        VestingError::Unauthorized
    );

    let old = st.receiver;
    st.receiver = new_receiver;

    emit!(OwnershipTransferred {
        old_receiver: old,
        new_receiver,
        query_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    pub receiver: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub old_receiver: Pubkey,
    pub new_receiver: Pubkey,
    pub query_id: u64,
}
