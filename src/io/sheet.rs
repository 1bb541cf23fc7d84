use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    EntryDraft, EntryKind, PaymentStatus, ServiceCategory, TransactionRecord, format_cents,
    parse_cents,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the ledger sheet, in the column layout the shop has always
/// kept: `Date, Type, Customer, Service, Applications, Expense, Income,
/// Profit, Payment Status, Amount Received, Pending Amount, Remarks`.
///
/// Older sheets have no `Applications` column; it reads as 1. `Profit` and
/// `Pending Amount` are written for the reader's benefit and ignored on the
/// way back in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Customer", default)]
    pub customer: Option<String>,
    #[serde(rename = "Service", default)]
    pub service: Option<String>,
    #[serde(rename = "Applications", default)]
    pub applications: Option<String>,
    #[serde(rename = "Expense", default)]
    pub expense: Option<String>,
    #[serde(rename = "Income", default)]
    pub income: Option<String>,
    #[serde(rename = "Profit", default)]
    pub profit: Option<String>,
    #[serde(rename = "Payment Status")]
    pub payment_status: String,
    #[serde(rename = "Amount Received", default)]
    pub amount_received: Option<String>,
    #[serde(rename = "Pending Amount", default)]
    pub pending_amount: Option<String>,
    #[serde(rename = "Remarks", default)]
    pub remarks: Option<String>,
}

impl SheetRow {
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            kind: record.kind.label().to_string(),
            customer: record.customer.clone(),
            service: record.service.map(|s| s.label().to_string()),
            applications: Some(record.application_count.to_string()),
            expense: Some(format_cents(record.expense_cents)),
            income: Some(format_cents(record.income_cents)),
            profit: Some(format_cents(record.profit())),
            payment_status: record.payment_status.label().to_string(),
            amount_received: Some(format_cents(record.received_cents)),
            pending_amount: Some(format_cents(record.pending_cents())),
            remarks: Some(record.remarks.clone()),
        }
    }

    /// Convert back into a record, applying the same payment rules and
    /// validation as a form submission.
    pub fn into_record(self) -> Result<TransactionRecord> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .with_context(|| format!("Invalid date '{}'", self.date))?;
        let kind = EntryKind::from_str(&self.kind)
            .ok_or_else(|| anyhow!("Invalid type '{}'", self.kind))?;
        let payment_status = PaymentStatus::from_str(&self.payment_status)
            .ok_or_else(|| anyhow!("Invalid payment status '{}'", self.payment_status))?;
        let service = non_empty(self.service)
            .map(|s| {
                ServiceCategory::from_str(&s).ok_or_else(|| anyhow!("Unknown service '{}'", s))
            })
            .transpose()?;
        let application_count = match non_empty(self.applications) {
            Some(count) => count
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid application count '{}'", count))?,
            None => 1,
        };

        let mut draft = match kind {
            EntryKind::Service => {
                EntryDraft::service(date, service.unwrap_or(ServiceCategory::Other))
            }
            EntryKind::Expense => EntryDraft::expense(date, 0),
        };
        draft.customer = non_empty(self.customer);
        draft.application_count = application_count;
        draft.expense_cents = money(self.expense, "Expense")?;
        draft.income_cents = money(self.income, "Income")?;
        draft.payment_status = payment_status;
        draft.received_cents = money(self.amount_received, "Amount Received")?;
        draft.remarks = self.remarks.unwrap_or_default();

        Ok(draft.build()?)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn money(value: Option<String>, column: &str) -> Result<i64> {
    match non_empty(value) {
        Some(v) => parse_cents(&v).with_context(|| format!("Invalid {} '{}'", column, v)),
        None => Ok(0),
    }
}
