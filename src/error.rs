use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Enter URL and select at least one HTML tag ({reason})")]
    Validation { reason: String },

    #[error("Error during data parsing: {reason}")]
    Fetch { reason: String },

    #[error("Storage error: {reason}")]
    Storage { reason: String },
}

impl HarvestError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }

    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch { reason: reason.into() }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::Storage { reason: reason.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
