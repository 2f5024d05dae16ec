use crate::application::error::PageResult;
use crate::application::repositories::PageRepository;
use crate::domain::aggregates::{Page, PageDraft};
use crate::domain::base::Entity;

/// Use case for creating a page
///
/// The draft is validated and given an identity and slug before anything is
/// written. An invalid draft never reaches the repository.
pub struct CreatePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> CreatePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    pub fn execute(&mut self, draft: PageDraft) -> PageResult<Page> {
        let page = draft.into_page()?;
        self.repository.save(&page)?;
        Ok(page)
    }
}

/// Use case for saving changes made to an existing page
///
/// Re-validates the page and re-derives its slug from the current title.
pub struct SavePage<'a, R: PageRepository> {
    repository: &'a mut R,
}

impl<'a, R: PageRepository> SavePage<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Returns whether the page already existed in the repository
    pub fn execute(&mut self, page: &mut Page) -> PageResult<bool> {
        page.prepare_for_save()?;
        let existed = self.repository.find_by_id(page.id())?.is_some();
        self.repository.save(page)?;
        Ok(existed)
    }
}
