use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_lock {
    use super::*;

    /// Create the vesting record from its schedule configuration, balances
    /// zeroed and the custodial token account still unbound.
    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        receiver: Pubkey,
        start_date: i64,
        cliff_date: i64,
        vesting_step: i64,
        vesting_amount: u64,
    ) -> Result<()> {
        instructions::create_vesting::create_vesting(
            ctx,
            receiver,
            start_date,
            cliff_date,
            vesting_step,
            vesting_amount,
        )
    }

    /// One-shot binding of the custodial token account. Receiver only.
    pub fn initialize(ctx: Context<Initialize>, query_id: u64) -> Result<()> {
        instructions::initialize::initialize(ctx, query_id)
    }

    /// Deposit notification: recognize tokens arriving on the custodial
    /// account, or refund a foreign token type in full.
    pub fn notify_deposit(ctx: Context<NotifyDeposit>, query_id: u64, amount: u64) -> Result<()> {
        instructions::notify_deposit::notify_deposit(ctx, query_id, amount)
    }

    /// Release the newly vested balance to the receiver.
    pub fn withdraw(ctx: Context<Withdraw>, query_id: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, query_id)
    }

    /// Reassign the receiver. Receiver only; effective immediately.
    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        query_id: u64,
        new_receiver: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, query_id, new_receiver)
    }

    /// Receiver-only relay of an arbitrary instruction, barred from touching
    /// the custodial token account.
    pub fn emergency<'info>(
        ctx: Context<'_, '_, '_, 'info, Emergency<'info>>,
        query_id: u64,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::emergency::emergency(ctx, query_id, data)
    }

    /// Emit the full vesting record as an event.
    pub fn emit_vesting_data(ctx: Context<EmitVestingData>) -> Result<()> {
        instructions::emit_vesting_data::emit_vesting_data(ctx)
    }
}
