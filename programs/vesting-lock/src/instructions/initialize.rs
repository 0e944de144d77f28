use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn initialize(ctx: Context<Initialize>, query_id: u64) -> Result<()> {
    let vesting_account_key = ctx.accounts.vesting_account.key();

    let st = &mut ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.receiver.key(),
        st.receiver,
        VestingError::Unauthorized
    );
    // Only a token account under this program's custody can be the vault.
    require_keys_eq!(
        ctx.accounts.vault.owner,
        vesting_account_key,
        VestingError::InvalidTokenAccount
    );

    st.bind_vault(ctx.accounts.vault.key())?;

    emit!(VaultBound {
        vault: ctx.accounts.vault.key(),
        receiver: st.receiver,
        query_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut, seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    pub vault: Account<'info, TokenAccount>,

    pub receiver: Signer<'info>,
}

#[event]
pub struct VaultBound {
    pub vault: Pubkey,
    pub receiver: Pubkey,
    pub query_id: u64,
}
