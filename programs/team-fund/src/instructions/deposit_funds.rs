use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::TeamFundError;
use crate::state::FundState;

pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, TeamFundError::InvalidConfig);

    let st = &ctx.accounts.fund_state;
    require_keys_eq!(
        ctx.accounts.leader.key(),
        st.leader,
        TeamFundError::UnauthorizedLeader
    );
    require!(!st.committed, TeamFundError::AlreadyCommitted);

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, TeamFundError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.leader_token_account.mint,
        st.mint,
        TeamFundError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.leader_token_account.owner,
        ctx.accounts.leader.key(),
        TeamFundError::InvalidTokenAccount
    );

    // Over-deposit protection.
    let pre = ctx.accounts.vault.amount as u128;
    let post = pre
        .checked_add(amount as u128)
        .ok_or(TeamFundError::MathOverflow)?;
    require!(post <= st.fund_total as u128, TeamFundError::OverDeposit);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.leader_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.leader.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount <= st.fund_total,
        TeamFundError::OverDeposit
    );

    emit!(FundsDeposited {
        leader: st.leader,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositFunds<'info> {
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
    pub leader_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub leader: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FundsDeposited {
    pub leader: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
