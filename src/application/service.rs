use std::path::Path;

use tracing::{debug, info};

use crate::domain::{
    BalancePeriod, DateRange, EntryDraft, TransactionRecord, category_breakdown,
    compute_period_balances, filter_by_date, pending_by_customer, summarize,
};
use crate::storage::Repository;

use super::{
    AppError, BalanceReport, CategoryReport, DashboardReport, PendingReport, ReportFilter,
    SummaryReport,
};

/// Application service providing the ledger operations.
/// This is the primary interface for any client (CLI, tests, other front ends).
pub struct LedgerService {
    repo: Repository,
}

/// A stored record together with its current zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub position: usize,
    pub record: TransactionRecord,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Open the ledger at the given path, creating an empty one if the file
    /// does not exist yet.
    pub async fn open(database_path: &str) -> Result<Self, AppError> {
        if !Path::new(database_path).exists() {
            debug!(path = database_path, "no ledger file found, starting empty");
        }
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    // ========================
    // Store operations
    // ========================

    /// Validate and append a record. Returns its position.
    pub async fn append(&self, record: TransactionRecord) -> Result<usize, AppError> {
        record.validate()?;
        let position = self.repo.append(&record).await?;
        info!(
            position,
            date = %record.date,
            kind = record.kind.as_str(),
            "entry appended"
        );
        Ok(position)
    }

    /// Build a record from form input and append it.
    pub async fn record_entry(&self, draft: EntryDraft) -> Result<LedgerEntry, AppError> {
        let record = draft.build()?;
        let position = self.append(record.clone()).await?;
        Ok(LedgerEntry { position, record })
    }

    /// Append many records in one transaction. Every record is validated
    /// before anything is written.
    pub async fn append_all(&self, records: &[TransactionRecord]) -> Result<usize, AppError> {
        for record in records {
            record.validate()?;
        }
        let count = self.repo.append_many(records).await?;
        info!(count, "entries appended");
        Ok(count)
    }

    /// The full ledger in insertion order.
    pub async fn load_all(&self) -> Result<Vec<TransactionRecord>, AppError> {
        let records = self.repo.load_all().await?;
        debug!(count = records.len(), "ledger loaded");
        Ok(records)
    }

    pub async fn len(&self) -> Result<usize, AppError> {
        Ok(self.repo.count().await?)
    }

    pub async fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len().await? == 0)
    }

    /// Remove the record at a zero-based position and return it.
    pub async fn delete_at(&self, position: usize) -> Result<TransactionRecord, AppError> {
        match self.repo.delete_at(position).await? {
            Some(record) => {
                info!(position, date = %record.date, "entry deleted");
                Ok(record)
            }
            None => {
                let len = self.repo.count().await?;
                Err(AppError::IndexOutOfRange { position, len })
            }
        }
    }

    /// Records with their positions, restricted to the filter's dates.
    pub async fn list_entries(&self, filter: ReportFilter) -> Result<Vec<LedgerEntry>, AppError> {
        let range = DateRange::bounded(filter.from, filter.to)?;
        let records = self.load_all().await?;

        Ok(records
            .into_iter()
            .enumerate()
            .filter(|(_, record)| range.contains(record.date))
            .map(|(position, record)| LedgerEntry { position, record })
            .collect())
    }

    // ========================
    // Reports
    // ========================

    async fn load_range(&self, filter: ReportFilter) -> Result<Vec<TransactionRecord>, AppError> {
        let range = DateRange::bounded(filter.from, filter.to)?;
        let records = self.load_all().await?;
        Ok(filter_by_date(&records, range.start, range.end)?)
    }

    pub async fn balance_report(
        &self,
        filter: ReportFilter,
        period: BalancePeriod,
    ) -> Result<BalanceReport, AppError> {
        let records = self.load_range(filter).await?;
        Ok(BalanceReport {
            from: filter.from,
            to: filter.to,
            period,
            rows: compute_period_balances(&records, period),
        })
    }

    pub async fn summary_report(&self, filter: ReportFilter) -> Result<SummaryReport, AppError> {
        let records = self.load_range(filter).await?;
        Ok(SummaryReport {
            from: filter.from,
            to: filter.to,
            summary: summarize(&records),
        })
    }

    pub async fn category_report(&self, filter: ReportFilter) -> Result<CategoryReport, AppError> {
        let records = self.load_range(filter).await?;
        let categories = category_breakdown(&records);
        let total_income = categories.iter().map(|c| c.income).sum();
        let total_profit = categories.iter().map(|c| c.profit).sum();

        Ok(CategoryReport {
            from: filter.from,
            to: filter.to,
            categories,
            total_income,
            total_profit,
        })
    }

    pub async fn pending_report(&self, filter: ReportFilter) -> Result<PendingReport, AppError> {
        let records = self.load_range(filter).await?;
        let customers = pending_by_customer(&records);
        let total_pending = customers.iter().map(|c| c.pending).sum();

        Ok(PendingReport {
            from: filter.from,
            to: filter.to,
            customers,
            total_pending,
        })
    }

    pub async fn dashboard(
        &self,
        filter: ReportFilter,
        period: BalancePeriod,
    ) -> Result<DashboardReport, AppError> {
        let records = self.load_range(filter).await?;

        Ok(DashboardReport {
            from: filter.from,
            to: filter.to,
            period,
            summary: summarize(&records),
            balances: compute_period_balances(&records, period),
            categories: category_breakdown(&records),
            pending: pending_by_customer(&records),
        })
    }
}
