use crate::domain::{aggregates::Page, value_objects::{PageId, Tag}};
use thiserror::Error;

/// Failures surfaced by a page store.
///
/// These propagate to callers unchanged; nothing in the application layer
/// retries them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository trait for managing Page aggregates.
///
/// This trait defines the contract for persisting and retrieving pages from a
/// document store. Every query returns pages in the order they were first
/// saved, and a page keeps its position when it is saved again.
pub trait PageRepository {
    /// Saves a page to the repository.
    ///
    /// If a page with the same ID already exists, it is updated in place.
    /// Otherwise, a new page is created. Callers are expected to have run
    /// [`Page::prepare_for_save`] first.
    fn save(&mut self, page: &Page) -> StoreResult<()>;

    /// Finds a page by its unique identifier.
    fn find_by_id(&self, id: &PageId) -> StoreResult<Option<Page>>;

    /// Finds the first page whose slug matches `url_title`.
    fn find_by_url_title(&self, url_title: &str) -> StoreResult<Option<Page>>;

    /// Returns all pages in the repository.
    fn find_all(&self) -> StoreResult<Vec<Page>>;

    /// Returns every page carrying exactly this tag.
    fn find_by_tag(&self, tag: &Tag) -> StoreResult<Vec<Page>>;

    /// Returns every page carrying at least one of `tags`, once each,
    /// leaving out the page identified by `exclude`.
    fn find_sharing_tags(&self, tags: &[Tag], exclude: Option<&PageId>) -> StoreResult<Vec<Page>>;

    /// Deletes a page by its unique identifier.
    ///
    /// Returns `Ok(true)` if the page was deleted, `Ok(false)` if the page
    /// was not found.
    fn delete(&mut self, id: &PageId) -> StoreResult<bool>;

    /// Deletes every page, returning how many were removed.
    fn delete_all(&mut self) -> StoreResult<usize>;
}
