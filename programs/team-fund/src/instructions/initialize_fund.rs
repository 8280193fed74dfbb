use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_TITLE_LEN, MAX_MEMBERS};
use crate::error::TeamFundError;
use crate::state::{FundState, MemberEntry, Roster};

pub fn initialize_fund(
    ctx: Context<InitializeFund>,
    milestone_id: u64,
    title: String,
    fund_total: u64,
) -> Result<()> {
    require!(fund_total > 0, TeamFundError::InvalidConfig);
    require!(title.len() <= MAX_TITLE_LEN, TeamFundError::TitleTooLong);

    let st = &mut ctx.accounts.fund_state;
    st.mint = ctx.accounts.mint.key();
    st.leader = ctx.accounts.leader.key();
    st.milestone_id = milestone_id;
    st.title = title;
    st.fund_total = fund_total;
    st.paid_total = 0;
    st.member_count = 0;
    st.committed = false;

    // Empty roster; every ledger cell starts at 0.
    let roster = &mut ctx.accounts.roster;
    roster.entries = [MemberEntry::default(); MAX_MEMBERS];

    emit!(FundInitialized {
        mint: st.mint,
        leader: st.leader,
        milestone_id,
        fund_total,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(milestone_id: u64)]
pub struct InitializeFund<'info> {
    #[account(
        init,
        payer = leader,
        space = 8 + FundState::SIZE,
        seeds = [b"fund_state", milestone_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund_state: Account<'info, FundState>,

    #[account(
        init,
        payer = leader,
        space = Roster::space(),
        seeds = [b"roster", fund_state.key().as_ref()],
        bump
    )]
    pub roster: Box<Account<'info, Roster>>,

    #[account(
        init,
        payer = leader,
        token::mint = mint,
        token::authority = fund_state,
        seeds = [b"vault", fund_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub leader: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct FundInitialized {
    pub mint: Pubkey,
    pub leader: Pubkey,
    pub milestone_id: u64,
    pub fund_total: u64,
}
