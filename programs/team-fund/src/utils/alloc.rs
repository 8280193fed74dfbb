//! Pure allocation arithmetic for one milestone-fund session.
//!
//! Contracts:
//! - `sanitize_amount` strips every non-digit from raw input text (a leading
//!   minus is stripped, not rejected); the empty result coerces to 0; `None`
//!   only when the surviving digits overflow `u64`, in which case the caller
//!   leaves the ledger cell unchanged.
//! - `summarize` never clamps: `remaining` is signed and goes negative on
//!   over-allocation, which is a valid (non-submittable) session state.
//! - `member_percentage` rounds each member independently; the percentages
//!   are not guaranteed to sum to 100.

use crate::error::TeamFundError;

/// Session state derived from the allocated total vs. the fund total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AllocationStatus {
    /// Nothing allocated yet.
    Empty = 0,
    /// 0 < total < fund.
    Partial = 1,
    /// total == fund and total > 0; submission allowed.
    Exact = 2,
    /// total > fund; submission blocked.
    Over = 3,
}

/// Derived view of the ledger against the fund total. Recomputed on demand,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationSummary {
    pub fund_total: u64,
    pub total_allocated: u128,
    pub remaining: i128,
    pub status: AllocationStatus,
}

/// Sanitize raw user input into a non-negative amount.
///
/// Keeps ASCII digits only, so "1a2b3" parses as 123 and "-5" as 5. An
/// all-stripped (or empty) input is an explicit 0.
pub fn sanitize_amount(raw: &str) -> Option<u64> {
    // No digits at all is the empty-input case and reads as 0.
    let mut amount: u64 = 0;
    for c in raw.chars() {
        let Some(d) = c.to_digit(10) else { continue };
        amount = amount.checked_mul(10)?.checked_add(d as u64)?;
    }
    Some(amount)
}

/// Compute the allocation summary for the given ledger amounts.
///
/// The sum is widened to u128 (a bounded roster of u64 amounts cannot
/// overflow it) and the remainder is signed, so this is total: every input
/// has a summary.
pub fn summarize<I>(amounts: I, fund_total: u64) -> AllocationSummary
where
    I: IntoIterator<Item = u64>,
{
    let total_allocated: u128 = amounts.into_iter().map(u128::from).sum();
    let remaining = i128::from(fund_total) - total_allocated as i128;
    let status = if total_allocated == 0 {
        AllocationStatus::Empty
    } else if total_allocated < u128::from(fund_total) {
        AllocationStatus::Partial
    } else if total_allocated == u128::from(fund_total) {
        AllocationStatus::Exact
    } else {
        AllocationStatus::Over
    };
    AllocationSummary {
        fund_total,
        total_allocated,
        remaining,
        status,
    }
}

/// round(allocated / fund_total * 100), half-up. 0 when the fund is empty.
/// May exceed 100 for an over-allocated member.
pub fn member_percentage(allocated: u64, fund_total: u64) -> Result<u64, TeamFundError> {
    if fund_total == 0 {
        return Ok(0);
    }
    let scaled = (allocated as u128)
        .checked_mul(200)
        .ok_or(TeamFundError::MathOverflow)?
        .checked_add(fund_total as u128)
        .ok_or(TeamFundError::MathOverflow)?;
    let pct = scaled / (2 * fund_total as u128);
    u64::try_from(pct).map_err(|_| TeamFundError::MathOverflow)
}

/// True iff the distribution is fully and only-fully allocated: the one
/// condition under which commit is allowed. Advisory; the commit handler is
/// the enforcement point.
pub fn can_submit(summary: &AllocationSummary) -> bool {
    summary.remaining == 0 && summary.total_allocated > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_non_digits() {
        assert_eq!(sanitize_amount("1a2b3"), Some(123));
        assert_eq!(sanitize_amount("5,000,000"), Some(5_000_000));
        assert_eq!(sanitize_amount("abc"), Some(0));
    }

    #[test]
    fn sanitize_empty_is_zero() {
        assert_eq!(sanitize_amount(""), Some(0));
        assert_eq!(sanitize_amount("   "), Some(0));
    }

    #[test]
    fn sanitize_strips_leading_minus() {
        // The sign is stripped, not rejected: "-5" reads as 5.
        assert_eq!(sanitize_amount("-5"), Some(5));
    }

    #[test]
    fn sanitize_rejects_u64_overflow() {
        assert_eq!(sanitize_amount("18446744073709551615"), Some(u64::MAX));
        assert_eq!(sanitize_amount("18446744073709551616"), None);
    }

    #[test]
    fn sanitize_is_idempotent_on_its_output() {
        let first = sanitize_amount("1a2b3").unwrap();
        assert_eq!(sanitize_amount(&first.to_string()), Some(first));
    }

    #[test]
    fn summary_totals_and_remaining() {
        let s = summarize([100, 200, 0], 1_000);
        assert_eq!(s.total_allocated, 300);
        assert_eq!(s.remaining, 700);
        assert_eq!(s.status, AllocationStatus::Partial);
        assert!(!can_submit(&s));
    }

    #[test]
    fn empty_ledger_summary() {
        let s = summarize([], 9_000_000);
        assert_eq!(s.total_allocated, 0);
        assert_eq!(s.remaining, 9_000_000);
        assert_eq!(s.status, AllocationStatus::Empty);
        assert!(!can_submit(&s));
    }

    #[test]
    fn exact_allocation_submits() {
        // 9,000,000 VND split 5M/4M across two members.
        let s = summarize([5_000_000, 4_000_000], 9_000_000);
        assert_eq!(s.remaining, 0);
        assert_eq!(s.status, AllocationStatus::Exact);
        assert!(can_submit(&s));
    }

    #[test]
    fn over_allocation_goes_negative_and_blocks() {
        let s = summarize([5_000_000, 5_000_000], 9_000_000);
        assert_eq!(s.remaining, -1_000_000);
        assert_eq!(s.status, AllocationStatus::Over);
        assert!(!can_submit(&s));
    }

    #[test]
    fn zero_fund_never_submits() {
        let s = summarize([], 0);
        assert_eq!(s.status, AllocationStatus::Empty);
        assert!(!can_submit(&s));
        // Any allocation against a zero fund is over-allocation.
        let s = summarize([1], 0);
        assert_eq!(s.status, AllocationStatus::Over);
        assert!(!can_submit(&s));
    }

    #[test]
    fn percentages_round_independently() {
        // 1/3 each of a fund of 3 rounds to 33% per member; the sum is 99,
        // not 100, and that is accepted.
        let per: Vec<u64> = [1u64, 1, 1]
            .iter()
            .map(|&a| member_percentage(a, 3).unwrap())
            .collect();
        assert_eq!(per, vec![33, 33, 33]);
        assert_eq!(per.iter().sum::<u64>(), 99);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(member_percentage(1, 200).unwrap(), 1); // 0.5 -> 1
        assert_eq!(member_percentage(1, 201).unwrap(), 0); // 0.497.. -> 0
        assert_eq!(member_percentage(5_000_000, 9_000_000).unwrap(), 56);
    }

    #[test]
    fn percentage_edges() {
        assert_eq!(member_percentage(0, 1_000).unwrap(), 0);
        assert_eq!(member_percentage(1_000, 1_000).unwrap(), 100);
        assert_eq!(member_percentage(123, 0).unwrap(), 0);
        // Over-allocated member reads above 100.
        assert_eq!(member_percentage(2_000, 1_000).unwrap(), 200);
    }

    #[test]
    fn summary_is_deterministic() {
        let a = summarize([7, 11], 100);
        let b = summarize([7, 11], 100);
        assert_eq!(a, b);
    }
}
