pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod store;

pub use extractor::TagExtractor;
pub use fetcher::{HttpFetcher, PageFetcher, USER_AGENT};
pub use pipeline::Pipeline;
pub use store::{RecordStore, Store};
