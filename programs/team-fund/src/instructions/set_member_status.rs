use anchor_lang::prelude::*;

use crate::constants::{STATUS_ACTIVE, STATUS_INACTIVE};
use crate::error::TeamFundError;
use crate::state::{FundState, Roster};

/// Flip a member's ACTIVE/INACTIVE flag. Status is informational for the
/// presentation layer (echoed in `MemberQuote`); it gates neither allocation
/// nor payout, since a committed ledger must drain the vault exactly.
pub fn set_member_status(ctx: Context<SetMemberStatus>, wallet: Pubkey, active: bool) -> Result<()> {
    let st = &ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );

    let roster = &mut ctx.accounts.roster;
    let entry = roster
        .entries
        .iter_mut()
        .take(st.member_count as usize)
        .find(|e| e.wallet == wallet)
        .ok_or(TeamFundError::MemberNotFound)?;

    entry.status = if active { STATUS_ACTIVE } else { STATUS_INACTIVE };

    emit!(MemberStatusSet {
        leader: st.leader,
        wallet,
        active,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMemberStatus<'info> {
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
pub struct MemberStatusSet {
    pub leader: Pubkey,
    pub wallet: Pubkey,
    pub active: bool,
}
