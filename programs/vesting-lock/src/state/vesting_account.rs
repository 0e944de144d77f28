use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::vesting;

/// The program's entire persistent state: one custodial vesting record.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VestingAccount {
    /// Custodial token account holding the locked balance; bound once, never changed.
    pub vault: Option<Pubkey>,
    /// Current owner and beneficiary.
    pub receiver: Pubkey,
    /// Vesting clock origin (Unix seconds).
    pub start_date: i64,
    /// Cumulative amount ever deposited and recognized.
    pub locked_balance: u64,
    /// Cumulative amount ever released to the receiver.
    pub withdrawn_balance: u64,
    /// Earliest time any withdrawal is permitted.
    pub cliff_date: i64,
    /// Length of one vesting interval (seconds).
    pub vesting_step: i64,
    /// Amount released per completed interval since `start_date`.
    pub vesting_amount: u64,
}

impl VestingAccount {
    pub const SIZE: usize =
        1 + 32 + // vault (Option tag + key)
        32 +     // receiver
        8 +      // start_date
        8 +      // locked_balance
        8 +      // withdrawn_balance
        8 +      // cliff_date
        8 +      // vesting_step
        8;       // vesting_amount

    /// Bind the custodial token account. One-shot: a second call always
    /// fails, even with the same key.
    pub fn bind_vault(&mut self, vault: Pubkey) -> std::result::Result<(), VestingError> {
        if self.vault.is_some() {
            return Err(VestingError::AlreadyInitialized);
        }
        self.vault = Some(vault);
        Ok(())
    }

    /// Recognize a deposit forwarded by the custodial token account.
    pub fn credit_deposit(&mut self, amount: u64) -> std::result::Result<(), VestingError> {
        self.locked_balance = self
            .locked_balance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Recognized balance not yet paid out, vested or not.
    pub fn outstanding(&self) -> std::result::Result<u64, VestingError> {
        self.locked_balance
            .checked_sub(self.withdrawn_balance)
            .ok_or(VestingError::MathOverflow)
    }

    /// Total amount the schedule has released at `now`, capped at deposits.
    pub fn releasable(&self, now: i64) -> std::result::Result<u64, VestingError> {
        vesting::releasable(
            self.start_date,
            self.vesting_step,
            self.vesting_amount,
            self.locked_balance,
            now,
        )
    }

    /// Record a withdrawal at `now` and return the amount to pay out. The
    /// caller must emit the matching transfer in the same transaction.
    pub fn record_withdrawal(&mut self, now: i64) -> std::result::Result<u64, VestingError> {
        if now < self.cliff_date {
            return Err(VestingError::CliffNotReached);
        }
        let available = self.releasable(now)?;
        let to_send = available
            .checked_sub(self.withdrawn_balance)
            .ok_or(VestingError::MathOverflow)?;
        if to_send == 0 {
            return Err(VestingError::NothingToWithdraw);
        }
        self.withdrawn_balance = available;
        Ok(to_send)
    }

    /// True if an emergency relay addressing `destination` must be refused.
    pub fn is_forbidden_destination(&self, destination: &Pubkey) -> bool {
        self.vault == Some(*destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_MONTH: i64 = 60 * 60 * 24 * 30;
    const ONE_YEAR: i64 = ONE_MONTH * 12;
    const T0: i64 = 1_700_000_000;

    fn funded_account() -> VestingAccount {
        let mut acct = VestingAccount {
            vault: Some(Pubkey::new_unique()),
            receiver: Pubkey::new_unique(),
            start_date: T0,
            locked_balance: 0,
            withdrawn_balance: 0,
            cliff_date: T0 + ONE_YEAR,
            vesting_step: ONE_MONTH * 3,
            vesting_amount: 10,
        };
        acct.credit_deposit(100).unwrap();
        acct
    }

    #[test]
    fn serialized_record_round_trips() {
        let acct = funded_account();
        let mut data: Vec<u8> = Vec::new();
        acct.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), 8 + VestingAccount::SIZE);

        let decoded = VestingAccount::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded, acct);
    }

    #[test]
    fn vault_binding_is_one_shot() {
        let mut acct = funded_account();
        acct.vault = None;

        let vault = Pubkey::new_unique();
        acct.bind_vault(vault).unwrap();
        assert_eq!(acct.vault, Some(vault));

        // Re-binding fails even with the identical key.
        assert!(matches!(
            acct.bind_vault(vault),
            Err(VestingError::AlreadyInitialized)
        ));
        assert!(matches!(
            acct.bind_vault(Pubkey::new_unique()),
            Err(VestingError::AlreadyInitialized)
        ));
        assert_eq!(acct.vault, Some(vault));
    }

    #[test]
    fn deposit_overflow_fails_closed() {
        let mut acct = funded_account();
        assert!(matches!(
            acct.credit_deposit(u64::MAX),
            Err(VestingError::MathOverflow)
        ));
        assert_eq!(acct.locked_balance, 100);
    }

    #[test]
    fn withdrawal_blocked_before_cliff() {
        let mut acct = funded_account();
        // Two full steps have mathematically vested, but the cliff gates them.
        assert!(matches!(
            acct.record_withdrawal(acct.cliff_date - 1),
            Err(VestingError::CliffNotReached)
        ));
        assert_eq!(acct.withdrawn_balance, 0);
    }

    #[test]
    fn withdrawal_tops_up_to_cumulative_total() {
        let mut acct = funded_account();

        assert_eq!(acct.record_withdrawal(T0 + ONE_YEAR + 1).unwrap(), 40);
        assert_eq!(acct.withdrawn_balance, 40);

        // Same vested interval: nothing new, no double-pay.
        assert!(matches!(
            acct.record_withdrawal(T0 + ONE_YEAR + 1),
            Err(VestingError::NothingToWithdraw)
        ));
        assert!(matches!(
            acct.record_withdrawal(T0 + ONE_YEAR + ONE_MONTH * 2),
            Err(VestingError::NothingToWithdraw)
        ));
        assert_eq!(acct.withdrawn_balance, 40);

        assert_eq!(
            acct.record_withdrawal(T0 + ONE_YEAR + ONE_MONTH * 3).unwrap(),
            10
        );
        assert_eq!(acct.withdrawn_balance, 50);

        assert_eq!(
            acct.record_withdrawal(T0 + ONE_YEAR + ONE_MONTH * 9).unwrap(),
            20
        );
        assert_eq!(acct.withdrawn_balance, 70);
    }

    #[test]
    fn withdrawal_never_exceeds_deposits() {
        let mut acct = funded_account();

        let paid = acct.record_withdrawal(T0 + ONE_YEAR * 3).unwrap();
        assert_eq!(paid, 100);
        assert_eq!(acct.withdrawn_balance, acct.locked_balance);
        assert_eq!(acct.outstanding().unwrap(), 0);

        assert!(matches!(
            acct.record_withdrawal(T0 + ONE_YEAR * 4),
            Err(VestingError::NothingToWithdraw)
        ));

        // A later deposit unlocks the remainder of the schedule again.
        acct.credit_deposit(15).unwrap();
        assert_eq!(acct.record_withdrawal(T0 + ONE_YEAR * 4).unwrap(), 15);
        assert!(acct.withdrawn_balance <= acct.locked_balance);
    }

    #[test]
    fn emergency_guard_tracks_bound_vault() {
        let mut acct = funded_account();
        let vault = acct.vault.unwrap();
        let elsewhere = Pubkey::new_unique();

        assert!(acct.is_forbidden_destination(&vault));
        assert!(!acct.is_forbidden_destination(&elsewhere));

        // Nothing is custodial before binding, so nothing is forbidden.
        acct.vault = None;
        assert!(!acct.is_forbidden_destination(&vault));
    }
}
