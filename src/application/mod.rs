// Application layer - use cases on top of the store and the pure ledger
// functions. Every front end (CLI, tests) goes through `LedgerService`.

pub mod access;
pub mod error;
pub mod reporting;
pub mod service;

pub use access::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
