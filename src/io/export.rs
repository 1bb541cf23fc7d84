use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{LedgerService, ReportFilter};
use crate::domain::{BalancePeriod, LedgerSummary, TransactionRecord, format_cents, summarize};

use super::{DATE_FORMAT, SheetRow};

/// Full ledger snapshot for backup and transfer between machines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<TransactionRecord>,
    pub summary: LedgerSummary,
}

/// Exporter for writing ledger data to CSV or JSON
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export entries in the ledger sheet layout
    pub async fn export_entries_csv<W: Write>(
        &self,
        writer: W,
        filter: ReportFilter,
    ) -> Result<usize> {
        let entries = self.service.list_entries(filter).await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // serde writes the header from the first row, so an empty ledger
        // would produce an empty file without this
        if entries.is_empty() {
            csv_writer.write_record(SHEET_HEADER)?;
        }
        for entry in &entries {
            csv_writer.serialize(SheetRow::from_record(&entry.record))?;
        }

        csv_writer.flush()?;
        Ok(entries.len())
    }

    /// Export balance rows for the given period size
    pub async fn export_balances_csv<W: Write>(
        &self,
        writer: W,
        filter: ReportFilter,
        period: BalancePeriod,
    ) -> Result<usize> {
        let report = self.service.balance_report(filter, period).await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "date",
            "period_end",
            "received",
            "expense",
            "net",
            "opening_balance",
            "closing_balance",
        ])?;

        for row in &report.rows {
            csv_writer.write_record(&[
                row.date.format(DATE_FORMAT).to_string(),
                period.bucket_end(row.date).format(DATE_FORMAT).to_string(),
                format_cents(row.received),
                format_cents(row.expense),
                format_cents(row.net),
                format_cents(row.opening_balance),
                format_cents(row.closing_balance),
            ])?;
        }

        csv_writer.flush()?;
        Ok(report.rows.len())
    }

    /// Export the summary totals as `metric,value` pairs
    pub async fn export_summary_csv<W: Write>(
        &self,
        writer: W,
        filter: ReportFilter,
    ) -> Result<()> {
        let s = self.service.summary_report(filter).await?.summary;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["metric", "value"])?;
        for (metric, value) in [
            ("entries", s.entry_count.to_string()),
            ("applications", s.total_applications.to_string()),
            ("income", format_cents(s.total_income)),
            ("expense", format_cents(s.total_expense)),
            ("profit", format_cents(s.total_profit)),
            ("received", format_cents(s.total_received)),
            ("pending", format_cents(s.total_pending)),
            ("closing_balance", format_cents(s.closing_balance)),
        ] {
            csv_writer.write_record([metric, value.as_str()])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Export per-service totals
    pub async fn export_categories_csv<W: Write>(
        &self,
        writer: W,
        filter: ReportFilter,
    ) -> Result<usize> {
        let report = self.service.category_report(filter).await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "service",
            "count",
            "applications",
            "income",
            "expense",
            "profit",
        ])?;
        for c in &report.categories {
            csv_writer.write_record(&[
                c.category.as_str().to_string(),
                c.count.to_string(),
                c.applications.to_string(),
                format_cents(c.income),
                format_cents(c.expense),
                format_cents(c.profit),
            ])?;
        }

        csv_writer.flush()?;
        Ok(report.categories.len())
    }

    /// Export outstanding money per customer
    pub async fn export_pending_csv<W: Write>(
        &self,
        writer: W,
        filter: ReportFilter,
    ) -> Result<usize> {
        let report = self.service.pending_report(filter).await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["customer", "entries", "income", "received", "pending"])?;
        for c in &report.customers {
            csv_writer.write_record(&[
                c.customer.clone(),
                c.count.to_string(),
                format_cents(c.income),
                format_cents(c.received),
                format_cents(c.pending),
            ])?;
        }

        csv_writer.flush()?;
        Ok(report.customers.len())
    }

    /// Export the whole ledger as a JSON snapshot
    pub async fn export_full_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let entries = self.service.load_all().await?;
        let summary = summarize(&entries);

        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            entries,
            summary,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}

pub const SHEET_HEADER: [&str; 12] = [
    "Date",
    "Type",
    "Customer",
    "Service",
    "Applications",
    "Expense",
    "Income",
    "Profit",
    "Payment Status",
    "Amount Received",
    "Pending Amount",
    "Remarks",
];
