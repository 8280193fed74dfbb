pub mod fund_state;
pub mod roster;

pub use fund_state::*;
pub use roster::*;
