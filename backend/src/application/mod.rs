pub mod dto;
pub mod error;
pub mod repositories;
pub mod services;
pub mod use_cases;

pub use dto::PageDocument;
pub use error::{PageError, PageResult};
pub use repositories::{PageRepository, StoreError, StoreResult};
pub use services::{PageObserver, PageService};
pub use use_cases::{CreatePage, FindPagesByTag, FindSimilarPages, SavePage, SimilarTo};
