use crate::application::repositories::{PageRepository, StoreResult};
use crate::domain::aggregates::Page;
use crate::domain::base::Entity;
use crate::domain::value_objects::{PageId, Tag};

/// In-memory implementation of the PageRepository trait.
///
/// Pages are kept in a `Vec` so that every query answers in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPageRepository {
    pages: Vec<Page>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }

    fn matching(&self, predicate: impl Fn(&Page) -> bool) -> Vec<Page> {
        self.pages.iter().filter(|p| predicate(*p)).cloned().collect()
    }
}

impl PageRepository for InMemoryPageRepository {
    fn save(&mut self, page: &Page) -> StoreResult<()> {
        match self.position(page.id()) {
            Some(idx) => self.pages[idx] = page.clone(),
            None => self.pages.push(page.clone()),
        }
        Ok(())
    }

    fn find_by_id(&self, id: &PageId) -> StoreResult<Option<Page>> {
        Ok(self.position(id).map(|idx| self.pages[idx].clone()))
    }

    fn find_by_url_title(&self, url_title: &str) -> StoreResult<Option<Page>> {
        Ok(self
            .pages
            .iter()
            .find(|p| p.url_title().as_str() == url_title)
            .cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Page>> {
        Ok(self.pages.clone())
    }

    fn find_by_tag(&self, tag: &Tag) -> StoreResult<Vec<Page>> {
        Ok(self.matching(|p| p.has_tag(tag)))
    }

    fn find_sharing_tags(&self, tags: &[Tag], exclude: Option<&PageId>) -> StoreResult<Vec<Page>> {
        Ok(self.matching(|p| Some(p.id()) != exclude && p.shares_tag_with(tags)))
    }

    fn delete(&mut self, id: &PageId) -> StoreResult<bool> {
        match self.position(id) {
            Some(idx) => {
                self.pages.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_all(&mut self) -> StoreResult<usize> {
        let removed = self.pages.len();
        self.pages.clear();
        Ok(removed)
    }
}
