use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::TeamFundError;
use crate::state::{FundState, Roster};
use crate::utils::alloc::{self, AllocationStatus};

/// The submission gate, enforced. Commit is the one irreversible step: it
/// requires a fully-and-only-fully allocated ledger and an exactly funded
/// vault, then freezes the roster and ledger for payout.
pub fn commit_distribution(ctx: Context<CommitDistribution>) -> Result<()> {
    let st = &mut ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    let roster = &ctx.accounts.roster;
    let summary = alloc::summarize(
        roster
            .entries
            .iter()
            .take(st.member_count as usize)
            .map(|e| e.allocated),
        st.fund_total,
    );

    match summary.status {
        AllocationStatus::Exact => {}
        AllocationStatus::Empty => return Err(TeamFundError::NothingAllocated.into()),
        AllocationStatus::Partial => return Err(TeamFundError::UnderAllocated.into()),
        AllocationStatus::Over => return Err(TeamFundError::OverAllocated.into()),
    }
    debug_assert!(alloc::can_submit(&summary));

    require!(
        ctx.accounts.vault.amount == st.fund_total,
        TeamFundError::VaultNotExactlyFunded
    );

    st.committed = true;

    emit!(DistributionCommitted {
        leader: st.leader,
        milestone_id: st.milestone_id,
        fund_total: st.fund_total,
        member_count: st.member_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CommitDistribution<'info> {
    #[account(
        mut,
        seeds = [b"fund_state", fund_state.milestone_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund_state: Account<'info, FundState>,

    #[account(
        seeds = [b"roster", fund_state.key().as_ref()],
        bump
    )]
    pub roster: Box<Account<'info, Roster>>,

    #[account(
        seeds = [b"vault", fund_state.key().as_ref()],
        bump,
        constraint = vault.mint == fund_state.mint @ TeamFundError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub leader: Signer<'info>,
}

#[event]
pub struct DistributionCommitted {
    pub leader: Pubkey,
    pub milestone_id: u64,
    pub fund_total: u64,
    pub member_count: u8,
}
