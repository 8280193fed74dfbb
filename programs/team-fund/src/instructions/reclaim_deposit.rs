use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::TeamFundError;
use crate::state::FundState;

/// Withdraw escrowed funds back to the leader before commit. After commit
/// the vault belongs to the members.
pub fn reclaim_deposit(ctx: Context<ReclaimDeposit>, amount: u64) -> Result<()> {
    require!(amount > 0, TeamFundError::InvalidConfig);

    let st = &ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, TeamFundError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, TeamFundError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.leader_destination.mint,
        st.mint,
        TeamFundError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.leader_destination.owner,
        ctx.accounts.leader.key(),
        TeamFundError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.vault.amount >= amount,
        TeamFundError::InsufficientVaultBalance
    );

    let milestone_id_bytes = ctx.accounts.fund_state.milestone_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"fund_state",
        &milestone_id_bytes,
        &[ctx.bumps.fund_state],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.leader_destination.to_account_info(),
                authority: ctx.accounts.fund_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(DepositReclaimed {
        leader: st.leader,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReclaimDeposit<'info> {
    #[account(
        seeds = [b"fund_state", fund_state.milestone_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund_state: Account<'info, FundState>,

    #[account(
        mut,
        seeds = [b"vault", fund_state.key().as_ref()],
        bump,
        constraint = vault.mint == fund_state.mint @ TeamFundError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub leader_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub leader: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DepositReclaimed {
    pub leader: Pubkey,
    pub amount: u64,
}
