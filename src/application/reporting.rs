use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    BalancePeriod, BalanceRow, CategorySummary, Cents, CustomerBalance, LedgerSummary,
};

/// Optional date bounds for a report; missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub period: BalancePeriod,
    pub rows: Vec<BalanceRow>,
}

impl BalanceReport {
    pub fn closing_balance(&self) -> Cents {
        self.rows.last().map(|r| r.closing_balance).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub summary: LedgerSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: Vec<CategorySummary>,
    pub total_income: Cents,
    pub total_profit: Cents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub customers: Vec<CustomerBalance>,
    pub total_pending: Cents,
}

/// Everything the front page shows, computed from one scan of the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub period: BalancePeriod,
    pub summary: LedgerSummary,
    pub balances: Vec<BalanceRow>,
    pub categories: Vec<CategorySummary>,
    pub pending: Vec<CustomerBalance>,
}
