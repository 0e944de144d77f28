use anchor_lang::prelude::*;

/// Custom error codes for the vesting-lock program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: receiver signature required")]
    Unauthorized,

    #[msg("Custodial token account is already bound")]
    AlreadyInitialized,

    #[msg("Custodial token account is not bound yet")]
    NotInitialized,

    #[msg("Withdraw called before the cliff date")]
    CliffNotReached,

    #[msg("No newly vested balance to withdraw")]
    NothingToWithdraw,

    #[msg("Emergency message may not target the custodial token account")]
    ForbiddenDestination,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
