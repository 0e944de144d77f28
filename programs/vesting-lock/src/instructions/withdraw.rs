use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn withdraw(ctx: Context<Withdraw>, query_id: u64) -> Result<()> {
    let vesting_account_ai = ctx.accounts.vesting_account.to_account_info();
    let vesting_account_bump = ctx.bumps.vesting_account;

    let st = &mut ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.receiver.key(),
        st.receiver,
        VestingError::Unauthorized
    );

    let vault_key = st.vault.ok_or(VestingError::NotInitialized)?;
    require_keys_eq!(
        ctx.accounts.vault.key(),
        vault_key,
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.receiver_wallet.mint,
        ctx.accounts.vault.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.receiver_wallet.owner,
        ctx.accounts.receiver.key(),
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let to_send = st.record_withdrawal(now)?;

    require!(
        ctx.accounts.vault.amount >= to_send,
        VestingError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting", &[vesting_account_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.receiver_wallet.to_account_info(),
                authority: vesting_account_ai,
            },
            signer_seeds,
        ),
        to_send,
    )?;

    emit!(TokensWithdrawn {
        receiver: st.receiver,
        amount: to_send,
        withdrawn_balance: st.withdrawn_balance,
        query_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub receiver_wallet: Account<'info, TokenAccount>,

    pub receiver: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub receiver: Pubkey,
    pub amount: u64,
    pub withdrawn_balance: u64,
    pub query_id: u64,
}
