use chrono::NaiveDate;
use thiserror::Error;

use super::{Cents, MAX_CENTS, PaymentStatus, format_cents};

/// Rejections raised while building or filtering ledger records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Amount received ({}) exceeds income ({})",
        format_cents(*received),
        format_cents(*income)
    )]
    ReceivedExceedsIncome { received: Cents, income: Cents },

    #[error(
        "{status} entry has {} received against {} income",
        format_cents(*received),
        format_cents(*income)
    )]
    ReceivedDoesNotMatchStatus {
        status: PaymentStatus,
        received: Cents,
        income: Cents,
    },

    #[error("{field} cannot be negative (got {})", format_cents(*amount))]
    NegativeAmount { field: &'static str, amount: Cents },

    #[error("{field} exceeds the largest supported amount ({})", format_cents(MAX_CENTS))]
    AmountTooLarge { field: &'static str },

    #[error("Application count must be at least 1")]
    ZeroApplications,

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
