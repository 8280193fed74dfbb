use anchor_lang::prelude::*;

use crate::constants::MAX_TITLE_LEN;

/// Per-milestone fund session state PDA.
#[account]
pub struct FundState {
    /// Token mint the fund is denominated in.
    pub mint: Pubkey,
    /// Leader authority: the only key allowed to allocate and commit.
    pub leader: Pubkey,
    /// Milestone this fund belongs to (PDA seed).
    pub milestone_id: u64,
    /// Human-readable milestone title (<= MAX_TITLE_LEN bytes).
    pub title: String,
    /// Fund amount released for this milestone, smallest currency unit.
    /// Fixed for the life of the session.
    pub fund_total: u64,
    /// Sum of per-member paid amounts (post-commit bookkeeping).
    pub paid_total: u64,
    /// Live roster entries (<= MAX_MEMBERS).
    pub member_count: u8,
    /// Set once the distribution is committed; freezes roster and ledger.
    pub committed: bool,
}

impl FundState {
    pub const SIZE: usize =
        32 +                 // mint
        32 +                 // leader
        8 +                  // milestone_id
        4 + MAX_TITLE_LEN +  // title
        8 +                  // fund_total
        8 +                  // paid_total
        1 +                  // member_count
        1;                   // committed
}

#[cfg(test)]
mod tests {
    use super::*;

    // Locks the seed scheme used by every instruction context: the second
    // seed must be the little-endian milestone id as an unsized byte slice.
    #[test]
    fn fund_state_pda_varies_with_milestone_id() {
        let derive = |milestone_id: u64| {
            Pubkey::find_program_address(
                &[b"fund_state", milestone_id.to_le_bytes().as_ref()],
                &crate::ID,
            )
            .0
        };
        assert_ne!(derive(1), derive(2));
        assert_eq!(derive(7), derive(7));
    }
}
