//! Milestone team-fund distribution program.
//!
//! One fund session per milestone: the leader registers members, edits a
//! per-member allocation ledger from raw input text, and may only commit
//! once the allocated total equals the fund total exactly. Commit freezes
//! the ledger; payouts then transfer each member's slice from the vault.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("GYEqnvXhu1QPnhUQvPRpqg6k7M262ZKNSFsP4SQyEwep");

#[program]
pub mod team_fund {
    use super::*;

    pub fn initialize_fund(
        ctx: Context<InitializeFund>,
        milestone_id: u64,
        title: String,
        fund_total: u64,
    ) -> Result<()> {
        instructions::initialize_fund(ctx, milestone_id, title, fund_total)
    }

    pub fn register_members(
        ctx: Context<RegisterMembers>,
        inputs: Vec<state::MemberInput>,
    ) -> Result<()> {
        instructions::register_members(ctx, inputs)
    }

    pub fn set_member_status(
        ctx: Context<SetMemberStatus>,
        wallet: Pubkey,
        active: bool,
    ) -> Result<()> {
        instructions::set_member_status(ctx, wallet, active)
    }

    pub fn set_allocation(
        ctx: Context<SetAllocation>,
        wallet: Pubkey,
        raw_amount: String,
    ) -> Result<()> {
        instructions::set_allocation(ctx, wallet, raw_amount)
    }

    pub fn reset_allocations(ctx: Context<ResetAllocations>) -> Result<()> {
        instructions::reset_allocations(ctx)
    }

    pub fn emit_allocation_quote(ctx: Context<EmitAllocationQuote>) -> Result<()> {
        instructions::emit_allocation_quote(ctx)
    }

    pub fn emit_member_quote(ctx: Context<EmitMemberQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_member_quote(ctx, wallet)
    }

    pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
        instructions::deposit_funds(ctx, amount)
    }

    pub fn reclaim_deposit(ctx: Context<ReclaimDeposit>, amount: u64) -> Result<()> {
        instructions::reclaim_deposit(ctx, amount)
    }

    pub fn commit_distribution(ctx: Context<CommitDistribution>) -> Result<()> {
        instructions::commit_distribution(ctx)
    }

    pub fn payout_member(ctx: Context<PayoutMember>, wallet: Pubkey) -> Result<()> {
        instructions::payout_member(ctx, wallet)
    }
}
