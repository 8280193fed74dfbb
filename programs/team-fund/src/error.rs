use anchor_lang::prelude::*;

/// Custom error codes for the team-fund distribution program.
#[error_code]
pub enum TeamFundError {
    #[msg("Unauthorized: leader signature required")]
    UnauthorizedLeader,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Milestone title exceeds the maximum length")]
    TitleTooLong,

    #[msg("Roster is full")]
    RosterFull,

    #[msg("Duplicate member wallet")]
    DuplicateMember,

    #[msg("Member not found")]
    MemberNotFound,

    #[msg("Distribution is already committed")]
    AlreadyCommitted,

    #[msg("Distribution is not committed")]
    NotCommitted,

    #[msg("Nothing has been allocated yet")]
    NothingAllocated,

    #[msg("Allocated total is below the fund total")]
    UnderAllocated,

    #[msg("Allocated total exceeds the fund total")]
    OverAllocated,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for member")]
    InvalidMemberAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed the fund total")]
    OverDeposit,

    #[msg("Vault must hold exactly the fund total at commit")]
    VaultNotExactlyFunded,
}
