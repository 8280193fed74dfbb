pub mod initialize_fund;
pub mod register_members;
pub mod set_member_status;
pub mod set_allocation;
pub mod reset_allocations;
pub mod emit_allocation_quote;
pub mod emit_member_quote;
pub mod deposit_funds;
pub mod reclaim_deposit;
pub mod commit_distribution;
pub mod payout_member;

pub use initialize_fund::*;
pub use register_members::*;
pub use set_member_status::*;
pub use set_allocation::*;
pub use reset_allocations::*;
pub use emit_allocation_quote::*;
pub use emit_member_quote::*;
pub use deposit_funds::*;
pub use reclaim_deposit::*;
pub use commit_distribution::*;
pub use payout_member::*;
