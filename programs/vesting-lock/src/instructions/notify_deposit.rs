use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn notify_deposit(ctx: Context<NotifyDeposit>, query_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let vesting_account_ai = ctx.accounts.vesting_account.to_account_info();
    let vesting_account_key = ctx.accounts.vesting_account.key();
    let vesting_account_bump = ctx.bumps.vesting_account;

    // Deposits only ever arrive on token accounts under this program's custody.
    require_keys_eq!(
        ctx.accounts.forwarding_wallet.owner,
        vesting_account_key,
        VestingError::InvalidTokenAccount
    );

    let st = &mut ctx.accounts.vesting_account;
    if st.vault == Some(ctx.accounts.forwarding_wallet.key()) {
        st.credit_deposit(amount)?;

        // A notification is only as good as the tokens behind it: the vault
        // must actually hold everything recognized and not yet paid out.
        let outstanding = st.outstanding()?;
        require!(
            ctx.accounts.forwarding_wallet.amount >= outstanding,
            VestingError::InsufficientVaultBalance
        );

        emit!(DepositRecognized {
            depositor: ctx.accounts.depositor.key(),
            amount,
            locked_balance: st.locked_balance,
            query_id,
        });
        return Ok(());
    }

    // Unrecognized token type: return the full amount to the depositor
    // instead of absorbing it. Not a fault.
    require_keys_eq!(
        ctx.accounts.depositor_wallet.owner,
        ctx.accounts.depositor.key(),
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.depositor_wallet.mint,
        ctx.accounts.forwarding_wallet.mint,
        VestingError::InvalidTokenMint
    );
    require!(
        ctx.accounts.forwarding_wallet.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting", &[vesting_account_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.forwarding_wallet.to_account_info(),
                to: ctx.accounts.depositor_wallet.to_account_info(),
                authority: vesting_account_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(ForeignDepositRefunded {
        depositor: ctx.accounts.depositor.key(),
        forwarding_wallet: ctx.accounts.forwarding_wallet.key(),
        amount,
        query_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct NotifyDeposit<'info> {
    #[account(mut, seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    /// Token account that received the deposit and forwarded this notification.
    #[account(mut)]
    pub forwarding_wallet: Account<'info, TokenAccount>,

    /// CHECK: original depositor; refund target ownership is checked against it.
    pub depositor: UncheckedAccount<'info>,

    /// Refund destination for deposits of an unrecognized token type.
    #[account(mut)]
    pub depositor_wallet: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DepositRecognized {
    pub depositor: Pubkey,
    pub amount: u64,
    pub locked_balance: u64,
    pub query_id: u64,
}

#[event]
pub struct ForeignDepositRefunded {
    pub depositor: Pubkey,
    pub forwarding_wallet: Pubkey,
    pub amount: u64,
    pub query_id: u64,
}
