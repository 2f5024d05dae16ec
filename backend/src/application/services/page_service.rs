/// Async facade over a page store
use crate::application::error::{PageError, PageResult};
use crate::application::repositories::PageRepository;
use crate::application::use_cases::{CreatePage, FindPagesByTag, FindSimilarPages, SavePage, SimilarTo};
use crate::domain::aggregates::{Page, PageDraft};
use crate::domain::base::{DomainEvent, Entity};
use crate::domain::events::PageEvent;
use crate::domain::value_objects::{PageId, Tag};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Callback type for page events
pub type PageObserver = Arc<dyn Fn(PageEvent) + Send + Sync>;

/// Service exposing the page model's operations over a shared store handle.
///
/// Cloning the service clones the handle, not the store: every clone sees the
/// same pages. Writes are serialized by the store lock.
pub struct PageService<R: PageRepository> {
    repository: Arc<Mutex<R>>,
    observer: Option<PageObserver>,
}

impl<R: PageRepository> Clone for PageService<R> {
    fn clone(&self) -> Self {
        PageService {
            repository: Arc::clone(&self.repository),
            observer: self.observer.clone(),
        }
    }
}

impl<R: PageRepository + Send + 'static> PageService<R> {
    pub fn new(repository: R) -> Self {
        PageService {
            repository: Arc::new(Mutex::new(repository)),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: PageObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate a draft without storing it
    pub async fn validate(&self, draft: &PageDraft) -> PageResult<()> {
        draft.validate().map_err(|errors| {
            tracing::warn!("Rejected page draft: {}", errors);
            PageError::from(errors)
        })
    }

    /// Validate a draft, assign it an identity and store it
    pub async fn create(&self, draft: PageDraft) -> PageResult<Page> {
        let page = {
            let mut repo = self.repository.lock().await;
            CreatePage::new(&mut *repo).execute(draft)
        };
        let page = self.log_failure("create page", page)?;

        self.emit(PageEvent::Created {
            page_id: page.id().clone(),
            url_title: page.url_title().clone(),
        });
        Ok(page)
    }

    /// Store changes made through the page's setters.
    ///
    /// The slug is re-derived from the title as part of the save.
    pub async fn save(&self, page: &mut Page) -> PageResult<()> {
        let existed = {
            let mut repo = self.repository.lock().await;
            SavePage::new(&mut *repo).execute(page)
        };
        let existed = self.log_failure("save page", existed)?;

        let event = if existed {
            PageEvent::Updated {
                page_id: page.id().clone(),
                url_title: page.url_title().clone(),
            }
        } else {
            PageEvent::Created {
                page_id: page.id().clone(),
                url_title: page.url_title().clone(),
            }
        };
        self.emit(event);
        Ok(())
    }

    pub async fn find_by_id(&self, id: &PageId) -> PageResult<Option<Page>> {
        let repo = self.repository.lock().await;
        Ok(repo.find_by_id(id)?)
    }

    /// Like [`find_by_id`](Self::find_by_id), but a missing page is an error
    pub async fn get(&self, id: &PageId) -> PageResult<Page> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| PageError::NotFound(id.clone()))
    }

    pub async fn find_by_url_title(&self, url_title: &str) -> PageResult<Option<Page>> {
        let repo = self.repository.lock().await;
        Ok(repo.find_by_url_title(url_title)?)
    }

    pub async fn find_all(&self) -> PageResult<Vec<Page>> {
        let repo = self.repository.lock().await;
        Ok(repo.find_all()?)
    }

    /// All pages carrying exactly `tag`
    pub async fn find_by_tag(&self, tag: &Tag) -> PageResult<Vec<Page>> {
        let found = {
            let repo = self.repository.lock().await;
            FindPagesByTag::new(&*repo).execute(tag)
        };
        Ok(self.log_failure("find pages by tag", found)?)
    }

    /// Pages sharing at least one tag with the reference, never the reference itself
    pub async fn find_similar(&self, reference: SimilarTo<'_>) -> PageResult<Vec<Page>> {
        let found = {
            let repo = self.repository.lock().await;
            FindSimilarPages::new(&*repo).execute(reference)
        };
        Ok(self.log_failure("find similar pages", found)?)
    }

    /// Load a page by id and find the pages similar to it
    pub async fn find_similar_by_id(&self, id: &PageId) -> PageResult<Vec<Page>> {
        let page = self.get(id).await?;
        self.find_similar(SimilarTo::Page(&page)).await
    }

    /// Remove one page; returns whether it existed
    pub async fn remove(&self, id: &PageId) -> PageResult<bool> {
        let removed = {
            let mut repo = self.repository.lock().await;
            repo.delete(id)
        };
        let removed = self.log_failure("remove page", removed)?;

        if removed {
            self.emit(PageEvent::Removed { page_id: id.clone() });
        }
        Ok(removed)
    }

    /// Remove every page; returns how many were removed
    pub async fn remove_all(&self) -> PageResult<usize> {
        let removed = {
            let mut repo = self.repository.lock().await;
            repo.delete_all()
        };
        let removed = self.log_failure("remove all pages", removed)?;

        self.emit(PageEvent::Cleared { pages_removed: removed });
        Ok(removed)
    }

    fn emit(&self, event: PageEvent) {
        tracing::debug!(
            event = event.event_type(),
            page = %event.aggregate_id(),
            "page event"
        );
        if let Some(ref observer) = self.observer {
            observer(event);
        }
    }

    fn log_failure<T, E>(&self, action: &str, result: Result<T, E>) -> Result<T, E>
    where
        E: std::fmt::Display,
    {
        if let Err(ref e) = result {
            tracing::error!("Failed to {}: {}", action, e);
        }
        result
    }
}
