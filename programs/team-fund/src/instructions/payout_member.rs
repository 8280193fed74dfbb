use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::TeamFundError;
use crate::state::{FundState, Roster};

pub fn payout_member(ctx: Context<PayoutMember>, wallet: Pubkey) -> Result<()> {
    // Capture AccountInfos/bumps before taking mutable borrows.
    let fund_state_ai = ctx.accounts.fund_state.to_account_info();
    let fund_state_bump = ctx.bumps.fund_state;

    let st = &mut ctx.accounts.fund_state;
    require!(st.committed, TeamFundError::NotCommitted);
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

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, TeamFundError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, TeamFundError::InvalidTokenMint);
    let expected_ata = expected_ata_address(&wallet, &st.mint);
    require_keys_eq!(
        ctx.accounts.member_ata.key(),
        expected_ata,
        TeamFundError::InvalidMemberAta
    );
    // Strict ATA checks (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.member_ata.mint,
        st.mint,
        TeamFundError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.member_ata.owner,
        wallet,
        TeamFundError::InvalidTokenAccount
    );

    let payable = entry
        .allocated
        .checked_sub(entry.paid)
        .ok_or(TeamFundError::MathOverflow)?;
    if payable == 0 {
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= payable,
        TeamFundError::InsufficientVaultBalance
    );

    // CPI transfer from vault to member ATA, signed by the fund_state PDA.
    let milestone_id_bytes = st.milestone_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"fund_state",
        &milestone_id_bytes,
        &[fund_state_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.member_ata.to_account_info(),
                authority: fund_state_ai,
            },
            signer_seeds,
        ),
        payable,
    )?;

    entry.paid = entry
        .paid
        .checked_add(payable)
        .ok_or(TeamFundError::MathOverflow)?;
    st.paid_total = st
        .paid_total
        .checked_add(payable)
        .ok_or(TeamFundError::MathOverflow)?;

    emit!(MemberPaid {
        wallet,
        amount: payable,
        allocated: entry.allocated,
        paid_total: st.paid_total,
    });

    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    // ATA derivation: PDA(owner, token_program_id, mint) with the associated
    // token program id.
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct PayoutMember<'info> {
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

    #[account(
        mut,
        seeds = [b"vault", fund_state.key().as_ref()],
        bump,
        constraint = vault.mint == fund_state.mint @ TeamFundError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub member_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub leader: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct MemberPaid {
    pub wallet: Pubkey,
    pub amount: u64,
    pub allocated: u64,
    pub paid_total: u64,
}
