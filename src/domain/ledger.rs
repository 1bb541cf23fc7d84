//! Aggregation over ledger records.
//!
//! Every report is derived here from a plain slice of records, so any
//! consumer that can produce `load_all()` output gets the same totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    BalancePeriod, Cents, EntryKind, ServiceCategory, TransactionRecord, ValidationError,
};

/// Label used for pending money owed by entries without a customer name.
pub const WALK_IN_CUSTOMER: &str = "(walk-in)";

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range with open bounds on either side.
    pub fn bounded(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        Self::new(start.unwrap_or(NaiveDate::MIN), end.unwrap_or(NaiveDate::MAX))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Cash position for one bucket (a day, week or month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// First day of the bucket
    pub date: NaiveDate,
    pub received: Cents,
    pub expense: Cents,
    /// received - expense within the bucket
    pub net: Cents,
    pub opening_balance: Cents,
    pub closing_balance: Cents,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub entry_count: usize,
    pub total_applications: u64,
    pub total_income: Cents,
    pub total_expense: Cents,
    pub total_profit: Cents,
    pub total_received: Cents,
    pub total_pending: Cents,
    pub closing_balance: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: ServiceCategory,
    pub count: usize,
    pub applications: u64,
    pub income: Cents,
    pub expense: Cents,
    pub profit: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBalance {
    pub customer: String,
    pub count: usize,
    pub income: Cents,
    pub received: Cents,
    pub pending: Cents,
}

/// Keep the records dated within `[start, end]`, preserving their order.
pub fn filter_by_date(
    records: &[TransactionRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<TransactionRecord>, ValidationError> {
    let range = DateRange::new(start, end)?;
    Ok(records
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect())
}

/// One row per distinct date, ascending. Dates without records are skipped.
pub fn compute_daily_balances(records: &[TransactionRecord]) -> Vec<BalanceRow> {
    compute_period_balances(records, BalancePeriod::Daily)
}

/// Roll records into buckets and carry a running balance across them in
/// date order. Insertion order does not matter; same-bucket records are summed.
pub fn compute_period_balances(
    records: &[TransactionRecord],
    period: BalancePeriod,
) -> Vec<BalanceRow> {
    let mut buckets: BTreeMap<NaiveDate, (Cents, Cents)> = BTreeMap::new();
    for record in records {
        let entry = buckets
            .entry(period.bucket_start(record.date))
            .or_insert((0, 0));
        entry.0 += record.received_cents;
        entry.1 += record.expense_cents;
    }

    let mut running = 0;
    buckets
        .into_iter()
        .map(|(date, (received, expense))| {
            let net = received - expense;
            let opening_balance = running;
            running += net;
            BalanceRow {
                date,
                received,
                expense,
                net,
                opening_balance,
                closing_balance: running,
            }
        })
        .collect()
}

pub fn summarize(records: &[TransactionRecord]) -> LedgerSummary {
    let mut summary = records
        .iter()
        .fold(LedgerSummary::default(), |mut acc, record| {
            acc.entry_count += 1;
            acc.total_applications += u64::from(record.application_count);
            acc.total_income += record.income_cents;
            acc.total_expense += record.expense_cents;
            acc.total_received += record.received_cents;
            acc.total_pending += record.pending_cents();
            acc
        });
    summary.total_profit = summary.total_income - summary.total_expense;
    summary.closing_balance = compute_daily_balances(records)
        .last()
        .map(|row| row.closing_balance)
        .unwrap_or(0);
    summary
}

/// Totals per service category, ordered by category.
pub fn category_breakdown(records: &[TransactionRecord]) -> Vec<CategorySummary> {
    let mut categories: BTreeMap<ServiceCategory, CategorySummary> = BTreeMap::new();

    for record in records.iter().filter(|r| r.kind == EntryKind::Service) {
        let category = record.service.unwrap_or(ServiceCategory::Other);
        let entry = categories.entry(category).or_insert(CategorySummary {
            category,
            count: 0,
            applications: 0,
            income: 0,
            expense: 0,
            profit: 0,
        });
        entry.count += 1;
        entry.applications += u64::from(record.application_count);
        entry.income += record.income_cents;
        entry.expense += record.expense_cents;
        entry.profit += record.profit();
    }

    categories.into_values().collect()
}

/// Outstanding money grouped by customer, largest debt first.
pub fn pending_by_customer(records: &[TransactionRecord]) -> Vec<CustomerBalance> {
    let mut customers: HashMap<&str, CustomerBalance> = HashMap::new();

    for record in records.iter().filter(|r| r.pending_cents() > 0) {
        let name = record.customer.as_deref().unwrap_or(WALK_IN_CUSTOMER);
        let entry = customers.entry(name).or_insert_with(|| CustomerBalance {
            customer: name.to_string(),
            count: 0,
            income: 0,
            received: 0,
            pending: 0,
        });
        entry.count += 1;
        entry.income += record.income_cents;
        entry.received += record.received_cents;
        entry.pending += record.pending_cents();
    }

    let mut balances: Vec<CustomerBalance> = customers.into_values().collect();
    balances.sort_by(|a, b| {
        b.pending
            .cmp(&a.pending)
            .then_with(|| a.customer.cmp(&b.customer))
    });
    balances
}
