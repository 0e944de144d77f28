use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

use crate::error::VestingError;
use crate::state::VestingAccount;

/// Relay an arbitrary instruction with the vesting account as signer.
///
/// Recovery hatch for assets other than the vested token: anything the
/// receiver wants the contract identity to do, except touching the custodial
/// token account and bypassing the schedule.
pub fn emergency<'info>(
    ctx: Context<'_, '_, '_, 'info, Emergency<'info>>,
    query_id: u64,
    data: Vec<u8>,
) -> Result<()> {
    let st = &ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.receiver.key(),
        st.receiver,
        VestingError::Unauthorized
    );

    let vesting_account_key = ctx.accounts.vesting_account.key();
    let target_program = ctx.accounts.target_program.key();
    require!(
        !st.is_forbidden_destination(&target_program),
        VestingError::ForbiddenDestination
    );

    let mut metas = Vec::with_capacity(ctx.remaining_accounts.len());
    for acc in ctx.remaining_accounts.iter() {
        // Addressing an account here is how a relayed instruction reaches
        // it, so the custodial guard covers every meta.
        require!(
            !st.is_forbidden_destination(acc.key),
            VestingError::ForbiddenDestination
        );
        metas.push(AccountMeta {
            pubkey: *acc.key,
            is_signer: acc.is_signer || *acc.key == vesting_account_key,
            is_writable: acc.is_writable,
        });
    }

    let ix = Instruction {
        program_id: target_program,
        accounts: metas,
        data,
    };

    let mut infos = ctx.remaining_accounts.to_vec();
    infos.push(ctx.accounts.target_program.to_account_info());

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting", &[ctx.bumps.vesting_account]]];
    invoke_signed(&ix, &infos, signer_seeds)?;

    emit!(EmergencySent {
        receiver: ctx.accounts.receiver.key(),
        target_program,
        query_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Emergency<'info> {
    #[account(seeds = [b"vesting"], bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    pub receiver: Signer<'info>,

    /// CHECK: program the relayed instruction is addressed to; only checked
    /// against the custodial token account.
    pub target_program: UncheckedAccount<'info>,
}

#[event]
pub struct EmergencySent {
    pub receiver: Pubkey,
    pub target_program: Pubkey,
    pub query_id: u64,
}
