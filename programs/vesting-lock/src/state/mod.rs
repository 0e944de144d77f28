pub mod vesting_account;

pub use vesting_account::*;
