mod export;
mod import;
mod sheet;

pub use export::*;
pub use import::*;
pub use sheet::*;
