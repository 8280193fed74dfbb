use anchor_lang::prelude::*;

use crate::state::{FundState, Roster};
use crate::utils::alloc;

/// Read-only: recompute and emit the fund-level allocation summary. Safe to
/// call on every edit; the summary is derived, never stored.
pub fn emit_allocation_quote(ctx: Context<EmitAllocationQuote>) -> Result<()> {
    let st = &ctx.accounts.fund_state;
    let roster = &ctx.accounts.roster;

    let summary = alloc::summarize(
        roster
            .entries
            .iter()
            .take(st.member_count as usize)
            .map(|e| e.allocated),
        st.fund_total,
    );

    emit!(AllocationQuote {
        milestone_id: st.milestone_id,
        fund_total: summary.fund_total,
        total_allocated: summary.total_allocated,
        remaining: summary.remaining,
        status: summary.status as u8,
        can_submit: alloc::can_submit(&summary),
        committed: st.committed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitAllocationQuote<'info> {
    #[account(
        seeds = [b"fund_state", fund_state.milestone_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund_state: Account<'info, FundState>,

    #[account(
        seeds = [b"roster", fund_state.key().as_ref()],
        bump
    )]
    pub roster: Box<Account<'info, Roster>>,
}

#[event]
pub struct AllocationQuote {
    pub milestone_id: u64,
    pub fund_total: u64,
    pub total_allocated: u128,
    pub remaining: i128,
    pub status: u8,
    pub can_submit: bool,
    pub committed: bool,
}
