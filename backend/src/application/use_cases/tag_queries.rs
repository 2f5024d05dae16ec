use crate::application::repositories::{PageRepository, StoreResult};
use crate::domain::{aggregates::Page, base::Entity, value_objects::Tag};

/// Use case for finding the pages filed under a tag
pub struct FindPagesByTag<'a, R: PageRepository> {
    repository: &'a R,
}

impl<'a, R: PageRepository> FindPagesByTag<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// All pages whose tags contain `tag` exactly
    pub fn execute(&self, tag: &Tag) -> StoreResult<Vec<Page>> {
        self.repository.find_by_tag(tag)
    }
}

/// What to look for similar pages to
#[derive(Debug, Clone, Copy)]
pub enum SimilarTo<'p> {
    /// Pages filed under this tag
    Tag(&'p Tag),
    /// Other pages sharing any tag with this page
    Page(&'p Page),
}

/// Use case for finding pages related to a tag or to another page
///
/// Similarity is tag overlap: a page is similar when it shares at least one
/// tag with the reference. A page is never similar to itself. Results come
/// back in the store's insertion order.
pub struct FindSimilarPages<'a, R: PageRepository> {
    repository: &'a R,
}

impl<'a, R: PageRepository> FindSimilarPages<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn execute(&self, reference: SimilarTo<'_>) -> StoreResult<Vec<Page>> {
        match reference {
            SimilarTo::Tag(tag) => self.repository.find_by_tag(tag),
            SimilarTo::Page(page) => {
                if page.tags().is_empty() {
                    return Ok(Vec::new());
                }
                self.repository
                    .find_sharing_tags(page.tags(), Some(page.id()))
            }
        }
    }
}
