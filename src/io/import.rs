use anyhow::Result;
use std::io::Read;
use tracing::{info, warn};

use crate::application::LedgerService;
use crate::domain::TransactionRecord;

use super::{LedgerSnapshot, SheetRow};

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Rows that parsed and validated
    pub valid: usize,
    /// Rows actually written (0 on a dry run)
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred on one line of an import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Parse and validate everything but write nothing
    pub dry_run: bool,
}

/// Importer for loading sheets and snapshots into the ledger
pub struct Importer<'a> {
    service: &'a LedgerService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Import entries from a CSV sheet. Rows that fail to parse or validate
    /// are reported and skipped; the rest are appended in file order.
    pub async fn import_entries_csv<R: Read>(
        &self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (index, result) in csv_reader.deserialize::<SheetRow>().enumerate() {
            let line = index + 2; // header is line 1

            let parsed = result
                .map_err(anyhow::Error::from)
                .and_then(SheetRow::into_record);
            match parsed {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line, error = %e, "skipping sheet row");
                    errors.push(ImportError {
                        line,
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        let imported = self.store(&records, &options).await?;
        Ok(ImportResult {
            valid: records.len(),
            imported,
            errors,
        })
    }

    /// Import every entry from a JSON snapshot
    pub async fn import_full_json<R: Read>(
        &self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let snapshot: LedgerSnapshot = serde_json::from_reader(reader)?;
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (index, record) in snapshot.entries.into_iter().enumerate() {
            match record.validate() {
                Ok(()) => records.push(record),
                Err(e) => errors.push(ImportError {
                    line: index + 1,
                    error: e.to_string(),
                }),
            }
        }

        let imported = self.store(&records, &options).await?;
        Ok(ImportResult {
            valid: records.len(),
            imported,
            errors,
        })
    }

    async fn store(&self, records: &[TransactionRecord], options: &ImportOptions) -> Result<usize> {
        if options.dry_run || records.is_empty() {
            return Ok(0);
        }
        let imported = self.service.append_all(records).await?;
        info!(imported, "import finished");
        Ok(imported)
    }
}
