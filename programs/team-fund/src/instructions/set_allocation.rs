use anchor_lang::prelude::*;

use crate::error::TeamFundError;
use crate::state::{FundState, Roster};
use crate::utils::alloc;

/// Apply one raw ledger edit. The input is arbitrary keystroke text; it is
/// sanitized, never rejected with a parse error. An amount that would
/// over-allocate the fund is stored as-is — that state is observable and
/// blocked later by the commit gate, not here.
pub fn set_allocation(ctx: Context<SetAllocation>, wallet: Pubkey, raw_amount: String) -> Result<()> {
    let st = &ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    let roster = &mut ctx.accounts.roster;
    let entry = roster
        .entries
        .iter_mut()
        .take(st.member_count as usize)
        .find(|e| e.wallet == wallet)
        .ok_or(TeamFundError::MemberNotFound)?;

    // Unparseable input (u64 overflow after stripping) leaves the cell
    // unchanged; the instruction still succeeds.
    let applied = match alloc::sanitize_amount(&raw_amount) {
        Some(amount) => {
            entry.allocated = amount;
            true
        }
        None => false,
    };
    let allocated = entry.allocated;

    let summary = alloc::summarize(
        roster
            .entries
            .iter()
            .take(st.member_count as usize)
            .map(|e| e.allocated),
        st.fund_total,
    );

    emit!(AllocationSet {
        wallet,
        applied,
        allocated,
        total_allocated: summary.total_allocated,
        remaining: summary.remaining,
        status: summary.status as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAllocation<'info> {
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
pub struct AllocationSet {
    pub wallet: Pubkey,
    pub applied: bool,
    pub allocated: u64,
    pub total_allocated: u128,
    pub remaining: i128,
    pub status: u8,
}
