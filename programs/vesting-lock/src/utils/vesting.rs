//! Cliff-then-linear-steps vesting math.
//! - releasable = floor((now - start_date) / vesting_step) * vesting_amount
//! - capped at locked_balance: the schedule never releases more than was
//!   actually deposited, whatever the nominal rate says
//! - the cliff gate and the already-withdrawn offset belong to the
//!   withdrawal handler, not this module

use crate::error::VestingError;

/// Total amount released by the schedule at `now`.
///
/// Non-decreasing in `now` for a fixed account state.
pub fn releasable(
    start_date: i64,
    vesting_step: i64,
    vesting_amount: u64,
    locked_balance: u64,
    now: i64,
) -> Result<u64, VestingError> {
    if vesting_step <= 0 {
        return Err(VestingError::InvalidConfig);
    }
    if now < start_date {
        return Ok(0);
    }
    let elapsed = now
        .checked_sub(start_date)
        .ok_or(VestingError::MathOverflow)?;
    let elapsed_steps = elapsed / vesting_step;
    let scheduled = (elapsed_steps as u128)
        .checked_mul(vesting_amount as u128)
        .ok_or(VestingError::MathOverflow)?;
    let capped = scheduled.min(locked_balance as u128);
    u64::try_from(capped).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_MONTH: i64 = 60 * 60 * 24 * 30;
    const ONE_YEAR: i64 = ONE_MONTH * 12;
    const T0: i64 = 1_700_000_000;
    const STEP: i64 = ONE_MONTH * 3;

    fn at(now: i64) -> u64 {
        releasable(T0, STEP, 10, 100, now).unwrap()
    }

    #[test]
    fn zero_before_start() {
        assert_eq!(at(T0 - 1), 0);
        assert_eq!(at(i64::MIN), 0);
    }

    #[test]
    fn step_boundaries_truncate() {
        assert_eq!(at(T0), 0);
        assert_eq!(at(T0 + STEP - 1), 0);
        assert_eq!(at(T0 + STEP), 10);
        assert_eq!(at(T0 + STEP * 2 - 1), 10);
        assert_eq!(at(T0 + STEP * 2), 20);
    }

    #[test]
    fn one_year_cliff_schedule() {
        // startDate = T0, step = 3 months, amount = 10, deposited = 100.
        assert_eq!(at(T0 + ONE_YEAR + 1), 40);
        assert_eq!(at(T0 + ONE_YEAR + ONE_MONTH * 2), 40);
        assert_eq!(at(T0 + ONE_YEAR + ONE_MONTH * 3), 50);
        assert_eq!(at(T0 + ONE_YEAR + ONE_MONTH * 9), 70);
    }

    #[test]
    fn capped_at_locked_balance() {
        assert_eq!(at(T0 + ONE_YEAR * 3), 100);
        assert_eq!(at(i64::MAX), 100);
        // Cap also bounds a per-step rate that dwarfs the deposits.
        assert_eq!(releasable(T0, STEP, u64::MAX, 5, T0 + STEP).unwrap(), 5);
    }

    #[test]
    fn monotonic_in_now() {
        let samples = [
            T0 - ONE_YEAR,
            T0 - 1,
            T0,
            T0 + 1,
            T0 + STEP,
            T0 + STEP + 1,
            T0 + ONE_YEAR,
            T0 + ONE_YEAR + ONE_MONTH * 7,
            T0 + ONE_YEAR * 2,
            T0 + ONE_YEAR * 10,
        ];
        let mut prev = 0;
        for now in samples {
            let cur = at(now);
            assert!(cur >= prev, "releasable decreased at now={now}");
            prev = cur;
        }
    }

    #[test]
    fn zero_step_rejected() {
        assert!(matches!(
            releasable(T0, 0, 10, 100, T0 + ONE_YEAR),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            releasable(T0, -1, 10, 100, T0 + ONE_YEAR),
            Err(VestingError::InvalidConfig)
        ));
    }
}
