pub mod create_vesting;
pub mod initialize;
pub mod notify_deposit;
pub mod withdraw;
pub mod transfer_ownership;
pub mod emergency;
pub mod emit_vesting_data;

pub use create_vesting::*;
pub use initialize::*;
pub use notify_deposit::*;
pub use withdraw::*;
pub use transfer_ownership::*;
pub use emergency::*;
pub use emit_vesting_data::*;
