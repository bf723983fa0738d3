use crate::error::{HarvestError, Result};
use crate::services::extractor::TagExtractor;
use crate::services::fetcher::PageFetcher;
use crate::services::store::RecordStore;
use crate::types::{ExtractionRequest, InsertFailure, PipelineOutcome};
use tracing::{info, warn};

/// One fetch, extract and persist pass per `run` call.
pub struct Pipeline<'s, F, S> {
    fetcher: F,
    store: &'s S,
}

impl<'s, F, S> Pipeline<'s, F, S>
where
    F: PageFetcher,
    S: RecordStore,
{
    pub fn new(fetcher: F, store: &'s S) -> Self {
        Self { fetcher, store }
    }

    pub async fn run(&self, request: &ExtractionRequest) -> Result<PipelineOutcome> {
        Self::validate(request)?;
        info!("Running extraction of {} tags from {}", request.tags.len(), request.url);

        let markup = self.fetcher.fetch(&request.url).await?;
        let result = TagExtractor::extract(&markup, &request.tags);

        let mut insert_failures = Vec::new();
        for (index, text) in result.iter().enumerate() {
            if let Err(error) = self.store.insert(text) {
                warn!("Skipping item {}: {}", index, error);
                insert_failures.push(InsertFailure {
                    index,
                    text: text.clone(),
                    error,
                });
            }
        }

        let outcome = PipelineOutcome {
            result,
            insert_failures,
        };
        info!(
            "Extracted {} items, stored {}",
            outcome.result.len(),
            outcome.stored_count()
        );

        Ok(outcome)
    }

    fn validate(request: &ExtractionRequest) -> Result<()> {
        if request.url.trim().is_empty() {
            return Err(HarvestError::validation("url is empty"));
        }
        if request.tags.iter().all(|t| t.trim().is_empty()) {
            return Err(HarvestError::validation("no tags selected"));
        }
        Ok(())
    }
}
