pub mod page_repository;

pub use page_repository::{PageRepository, StoreError, StoreResult};
