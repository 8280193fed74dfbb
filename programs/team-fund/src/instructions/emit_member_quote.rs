use anchor_lang::prelude::*;

use crate::error::TeamFundError;
use crate::state::{FundState, Roster};
use crate::utils::alloc;

/// Read-only: emit one member's slice of the fund. The percentage is rounded
/// independently per member, so the roster's percentages need not sum to 100.
pub fn emit_member_quote(ctx: Context<EmitMemberQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.fund_state;
    let roster = &ctx.accounts.roster;

    let entry = roster
        .entries
        .iter()
        .take(st.member_count as usize)
        .find(|e| e.wallet == wallet)
        .ok_or(TeamFundError::MemberNotFound)?;

    let percentage = alloc::member_percentage(entry.allocated, st.fund_total)?;

    emit!(MemberQuote {
        wallet,
        active: entry.is_active(),
        allocated: entry.allocated,
        percentage,
        paid: entry.paid,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitMemberQuote<'info> {
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
pub struct MemberQuote {
    pub wallet: Pubkey,
    pub active: bool,
    pub allocated: u64,
    pub percentage: u64,
    pub paid: u64,
}
