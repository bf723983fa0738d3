//! # Tag Harvest Library
//!
//! Fetches a web page, pulls the text of chosen HTML element types out of it,
//! and keeps every extracted string in a local SQLite database.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use tag_harvest::{ExtractionRequest, HttpFetcher, Pipeline, RecordStore, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open("data.db")?;
//!     let fetcher = HttpFetcher::new(Duration::from_secs(30))?;
//!     let pipeline = Pipeline::new(fetcher, &store);
//!
//!     let outcome = pipeline
//!         .run(&ExtractionRequest::new("example.com", ["h1", "p"]))
//!         .await?;
//!     println!("{}", outcome.status_message());
//!
//!     for record in store.list_all()? {
//!         println!("{}: {}", record.id, record.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{FetchConfig, HarvestConfig, StoreConfig};
pub use error::{HarvestError, Result};
pub use services::{HttpFetcher, PageFetcher, Pipeline, RecordStore, Store, TagExtractor};
pub use types::{
    ExtractedItem, ExtractionRequest, ExtractionResult, InsertFailure, PipelineOutcome,
    StoredRecord,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
