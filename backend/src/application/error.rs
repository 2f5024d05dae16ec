use crate::application::repositories::StoreError;
use crate::domain::{base::DomainError, validation::ValidationErrors, value_objects::PageId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Page not found: {0}")]
    NotFound(PageId),
}

impl PageError {
    /// The per-field failures, when this is a validation error
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            PageError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
