pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod pipeline;

pub use config::{Config, SheetGids};
pub use error::{CatalogSyncError, Result};
pub use fetcher::SheetFetcher;
pub use pipeline::{run_sync, sync_catalog, write_document};
