use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

use crate::domain::{
    EntryKind, PaymentStatus, ServiceCategory, TransactionRecord, default_application_count,
};

use super::MIGRATION_001_ENTRIES;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_ENTRIES: &str = r#"
    SELECT sequence, date, kind, customer, service, applications, expense_cents,
           income_cents, payment_status, received_cents, remarks
    FROM entries
"#;

/// Repository for persisting and reading ledger entries.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations. Safe to call on an existing database.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_ENTRIES)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Connect and migrate.
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Append a record at the end of the ledger and return its position.
    pub async fn append(&self, record: &TransactionRecord) -> Result<usize> {
        let mut tx = self.pool.begin().await.context("Failed to begin append")?;
        Self::insert(&mut tx, record).await?;
        let position = Self::count_in(&mut tx).await?.saturating_sub(1);
        tx.commit().await.context("Failed to commit entry")?;
        Ok(position)
    }

    /// Append several records atomically: either all are stored or none.
    pub async fn append_many(&self, records: &[TransactionRecord]) -> Result<usize> {
        let mut tx = self.pool.begin().await.context("Failed to begin import")?;
        for record in records {
            Self::insert(&mut tx, record).await?;
        }
        tx.commit().await.context("Failed to commit imported entries")?;
        Ok(records.len())
    }

    async fn insert(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        record: &TransactionRecord,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO entries (date, kind, customer, service, applications, expense_cents,
                                 income_cents, payment_status, received_cents, remarks, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.date.format(DATE_FORMAT).to_string())
        .bind(record.kind.as_str())
        .bind(&record.customer)
        .bind(record.service.map(|s| s.as_str()))
        .bind(i64::from(record.application_count))
        .bind(record.expense_cents)
        .bind(record.income_cents)
        .bind(record.payment_status.as_str())
        .bind(record.received_cents)
        .bind(&record.remarks)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut **tx)
        .await
        .context("Failed to save entry")?;
        Ok(())
    }

    /// All records in insertion order.
    pub async fn load_all(&self) -> Result<Vec<TransactionRecord>> {
        let query = format!("{SELECT_ENTRIES} ORDER BY sequence");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .context("Failed to load entries")?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM entries")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count entries")?;
        Self::count_from_row(&row)
    }

    async fn count_in(tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>) -> Result<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM entries")
            .fetch_one(&mut **tx)
            .await
            .context("Failed to count entries")?;
        Self::count_from_row(&row)
    }

    fn count_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<usize> {
        let count: i64 = row.get("count");
        usize::try_from(count).context("Invalid entry count")
    }

    /// Remove the record at a zero-based position.
    /// Returns `None` when the position is past the end of the ledger.
    pub async fn delete_at(&self, position: usize) -> Result<Option<TransactionRecord>> {
        let offset = i64::try_from(position).context("Position out of range")?;
        let mut tx = self.pool.begin().await.context("Failed to begin delete")?;

        let query = format!("{SELECT_ENTRIES} ORDER BY sequence LIMIT 1 OFFSET ?");
        let row = sqlx::query(&query)
            .bind(offset)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to look up entry")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sequence: i64 = row.get("sequence");
        let record = Self::row_to_record(&row)?;

        sqlx::query("DELETE FROM entries WHERE sequence = ?")
            .bind(sequence)
            .execute(&mut *tx)
            .await
            .context("Failed to delete entry")?;
        tx.commit().await.context("Failed to commit delete")?;

        Ok(Some(record))
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<TransactionRecord> {
        let date_str: String = row.get("date");
        let kind_str: String = row.get("kind");
        let service_str: Option<String> = row.get("service");
        let applications: Option<i64> = row.get("applications");
        let status_str: String = row.get("payment_status");
        let remarks: Option<String> = row.get("remarks");

        Ok(TransactionRecord {
            date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                .with_context(|| format!("Invalid entry date: {}", date_str))?,
            kind: EntryKind::from_str(&kind_str)
                .ok_or_else(|| anyhow::anyhow!("Invalid entry kind: {}", kind_str))?,
            customer: row.get("customer"),
            service: service_str
                .map(|s| {
                    ServiceCategory::from_str(&s)
                        .ok_or_else(|| anyhow::anyhow!("Invalid service category: {}", s))
                })
                .transpose()?,
            application_count: match applications {
                Some(count) => u32::try_from(count).context("Invalid application count")?,
                None => default_application_count(),
            },
            expense_cents: row.get("expense_cents"),
            income_cents: row.get("income_cents"),
            payment_status: PaymentStatus::from_str(&status_str)
                .ok_or_else(|| anyhow::anyhow!("Invalid payment status: {}", status_str))?,
            received_cents: row.get("received_cents"),
            remarks: remarks.unwrap_or_default(),
        })
    }
}
