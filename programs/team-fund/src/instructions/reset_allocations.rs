use anchor_lang::prelude::*;

use crate::error::TeamFundError;
use crate::state::{FundState, Roster};

/// Discard the whole ledger: every cell back to 0. Session cancellation is
/// exactly this plus `reclaim_deposit`; nothing else has happened yet.
pub fn reset_allocations(ctx: Context<ResetAllocations>) -> Result<()> {
    let st = &ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    let roster = &mut ctx.accounts.roster;
    for e in roster.entries.iter_mut().take(st.member_count as usize) {
        e.allocated = 0;
    }

    emit!(AllocationsReset {
        leader: st.leader,
        member_count: st.member_count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ResetAllocations<'info> {
    #[account(
        seeds = [b"fund_state", fund_state.milestone_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund_state: Account<'info, FundState>,

    #[account(
        mut,
        seeds = [b"roster", fund_state.key().as_ref()],
        bump
    )]
    pub roster: Box<Account<'info, Roster>>,

    pub leader: Signer<'info>,
}

#[event]
pub struct AllocationsReset {
    pub leader: Pubkey,
    pub member_count: u8,
}
