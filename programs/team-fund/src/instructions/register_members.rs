use anchor_lang::prelude::*;

use crate::constants::{MAX_MEMBERS, ROLE_LEADER, ROLE_MEMBER, STATUS_ACTIVE};
use crate::error::TeamFundError;
use crate::state::{FundState, MemberEntry, MemberInput, Roster};

pub fn register_members(ctx: Context<RegisterMembers>, inputs: Vec<MemberInput>) -> Result<()> {
    let st = &mut ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    let roster = &mut ctx.accounts.roster;
    let mut added: u8 = 0;

    for (i, input) in inputs.iter().enumerate() {
        require!(input.wallet != Pubkey::default(), TeamFundError::InvalidPubkey);
        require!(
            input.role == ROLE_MEMBER || input.role == ROLE_LEADER,
            TeamFundError::InvalidConfig
        );

        require!(
            (st.member_count as usize) < MAX_MEMBERS,
            TeamFundError::RosterFull
        );

        // Reject duplicates vs existing roster.
        for e in roster.entries.iter().take(st.member_count as usize) {
            if e.wallet == input.wallet {
                return Err(TeamFundError::DuplicateMember.into());
            }
        }
        // Reject duplicates within the batch itself.
        for j in 0..i {
            if inputs[j].wallet == input.wallet {
                return Err(TeamFundError::DuplicateMember.into());
            }
        }

        let idx = st.member_count as usize;
        roster.entries[idx] = MemberEntry {
            wallet: input.wallet,
            profile_hash: input.profile.hash(),
            role: input.role,
            status: STATUS_ACTIVE,
            _padding: [0u8; 6],
            allocated: 0,
            paid: 0,
        };
        st.member_count = st
            .member_count
            .checked_add(1)
            .ok_or(TeamFundError::MathOverflow)?;
        added = added.checked_add(1).ok_or(TeamFundError::MathOverflow)?;
    }

    emit!(MembersRegistered {
        count_added: added,
        new_total: st.member_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterMembers<'info> {
    #[account(
        mut,
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

    #[account(mut)]
    pub leader: Signer<'info>,
}

#[event]
pub struct MembersRegistered {
    pub count_added: u8,
    pub new_total: u8,
}
