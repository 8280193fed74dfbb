//! Program-wide constants.

/// Max members stored on-chain in the roster PDA.
pub const MAX_MEMBERS: usize = 16;

/// Max UTF-8 bytes for a milestone title.
pub const MAX_TITLE_LEN: usize = 64;

/// Member role tags stored in `MemberEntry.role`.
pub const ROLE_MEMBER: u8 = 0;
pub const ROLE_LEADER: u8 = 1;

/// Member status tags stored in `MemberEntry.status`.
pub const STATUS_INACTIVE: u8 = 0;
pub const STATUS_ACTIVE: u8 = 1;
