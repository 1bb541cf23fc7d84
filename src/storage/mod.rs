mod repository;

pub use repository::*;

/// SQL migration for the entries table
pub const MIGRATION_001_ENTRIES: &str = include_str!("migrations/001_entries.sql");
