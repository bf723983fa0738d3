use crate::error::HarvestError;
use serde::{Deserialize, Serialize};

/// A single extracted text value: the trimmed text content of one matched element.
pub type ExtractedItem = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub url: String,
    pub tags: Vec<String>,
}

impl ExtractionRequest {
    /// Builds a request, trimming the url and dropping blank tag names.
    pub fn new<I, T>(url: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let url = url.into().trim().to_string();
        let tags = tags
            .into_iter()
            .map(|t| t.into().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Self { url, tags }
    }
}

/// Extracted items, all matches for `tags[0]` first, then `tags[1]`, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub items: Vec<ExtractedItem>,
}

impl ExtractionResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedItem> {
        self.items.iter()
    }
}

impl From<Vec<ExtractedItem>> for ExtractionResult {
    fn from(items: Vec<ExtractedItem>) -> Self {
        Self { items }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: i64,
    pub text: String,
}

#[derive(Debug)]
pub struct InsertFailure {
    /// Position of the item within the extraction result.
    pub index: usize,
    pub text: String,
    pub error: HarvestError,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub result: ExtractionResult,
    pub insert_failures: Vec<InsertFailure>,
}

impl PipelineOutcome {
    pub fn stored_count(&self) -> usize {
        self.result.len() - self.insert_failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.insert_failures.is_empty()
    }

    pub fn status_message(&self) -> String {
        match self.insert_failures.last() {
            None => "Data loaded successfully.".to_string(),
            Some(failure) => format!(
                "Loaded {} of {} items. Error: {}",
                self.stored_count(),
                self.result.len(),
                failure.error
            ),
        }
    }
}
