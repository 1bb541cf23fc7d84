// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use servicebook::application::LedgerService;
use servicebook::domain::{Cents, EntryDraft, PaymentStatus, ServiceCategory, TransactionRecord};
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = LedgerService::open(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to parse a date string into NaiveDate
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// A service entry with an explicit amount received
pub fn service_entry(
    date_str: &str,
    income: Cents,
    expense: Cents,
    received: Cents,
) -> TransactionRecord {
    EntryDraft::service(date(date_str), ServiceCategory::Passport)
        .with_income(income)
        .with_expense(expense)
        .with_payment(PaymentStatus::Partial, received)
        .build()
        .unwrap()
}

/// The three-record ledger used across the balance tests
pub fn sample_records() -> Vec<TransactionRecord> {
    vec![
        service_entry("2024-01-01", 500, 100, 500),
        service_entry("2024-01-01", 300, 50, 0),
        service_entry("2024-01-02", 200, 20, 200),
    ]
}

/// Append the sample records to a service
pub async fn seed_sample(service: &LedgerService) -> Result<()> {
    for record in sample_records() {
        service.append(record).await?;
    }
    Ok(())
}
