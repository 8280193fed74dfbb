use anchor_lang::prelude::*;

use crate::constants::{STATUS_ACTIVE, STATUS_INACTIVE};

/// A single member entry stored in the roster PDA.
///
/// The `allocated` field doubles as this member's allocation-ledger cell:
/// a fresh entry holds 0, and an absent member reads the same as an
/// explicit zero allocation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct MemberEntry {
    pub wallet: Pubkey,
    /// blake3 commitment to the off-chain profile (name, email, avatar).
    pub profile_hash: [u8; 32],
    pub role: u8,
    pub status: u8,
    pub _padding: [u8; 6],
    /// Amount of the milestone fund allocated to this member.
    pub allocated: u64,
    /// Amount already paid out (post-commit).
    pub paid: u64,
}

impl Default for MemberEntry {
    fn default() -> Self {
        Self {
            wallet: Pubkey::default(),
            profile_hash: [0u8; 32],
            role: 0,
            status: STATUS_INACTIVE,
            _padding: [0u8; 6],
            allocated: 0,
            paid: 0,
        }
    }
}

impl MemberEntry {
    pub const SIZE: usize = core::mem::size_of::<MemberEntry>();

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// PDA holding the full member roster (<= MAX_MEMBERS entries).
#[account]
#[repr(C)]
pub struct Roster {
    /// Deterministic registration order; `FundState.member_count` bounds the
    /// live prefix.
    pub entries: [MemberEntry; crate::constants::MAX_MEMBERS],
}

impl Roster {
    /// Space for discriminator + fixed entries array (no vec header).
    pub const fn space() -> usize {
        8 + core::mem::size_of::<Roster>()
    }
}

/// Off-chain member profile; only its hash is stored on-chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MemberProfile {
    pub name: String,
    pub email: String,
    pub avatar_uri: String,
}

impl MemberProfile {
    /// Canonical blake3 commitment: each field length-prefixed so that
    /// ("ab", "c") and ("a", "bc") hash differently.
    pub fn hash(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        for field in [&self.name, &self.email, &self.avatar_uri] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        *hasher.finalize().as_bytes()
    }
}

/// Instruction input for member registration.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MemberInput {
    pub wallet: Pubkey,
    pub role: u8,
    pub profile: MemberProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_hash_is_field_sensitive() {
        let a = MemberProfile {
            name: "ab".into(),
            email: "c".into(),
            avatar_uri: String::new(),
        };
        let b = MemberProfile {
            name: "a".into(),
            email: "bc".into(),
            avatar_uri: String::new(),
        };
        assert_ne!(a.hash(), b.hash());
        assert_eq!(a.hash(), a.hash());
    }
}
