/// Domain aggregates
use super::base::{AggregateRoot, Entity};
use super::validation::{require, PageField, ValidationErrors};
use super::value_objects::{PageId, PageStatus, Tag, UrlTitle};
use chrono::{DateTime, Utc};

fn validate_fields(title: &str, content: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, PageField::Title, title);
    require(&mut errors, PageField::Content, content);
    errors.into_result()
}

/// The fields of a page that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    pub title: String,
    pub content: String,
    tags: Vec<Tag>,
    pub status: PageStatus,
}

impl PageDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        PageDraft {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Attach tags; repeated tags collapse to the first occurrence
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Tag::dedup(tags);
        self
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn with_status(mut self, status: PageStatus) -> Self {
        self.status = status;
        self
    }

    /// Check the required fields, reporting every one that is missing
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.title, &self.content)
    }

    /// Validate and turn the draft into a page with a fresh identity
    pub fn into_page(self) -> Result<Page, ValidationErrors> {
        self.into_page_with_id(PageId::generate(), Utc::now())
    }

    pub(crate) fn into_page_with_id(
        self,
        id: PageId,
        created_at: DateTime<Utc>,
    ) -> Result<Page, ValidationErrors> {
        self.validate()?;
        let url_title = UrlTitle::from_title(&self.title);
        Ok(Page {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            url_title,
            status: self.status,
            created_at,
        })
    }
}

/// A wiki page: titled content, categorized by tags and addressed by a slug
/// derived from its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    url_title: UrlTitle,
    status: PageStatus,
    created_at: DateTime<Utc>,
}

impl Page {
    /// Rebuild a page from stored fields without re-deriving anything
    pub(crate) fn restore(
        id: PageId,
        title: String,
        content: String,
        tags: Vec<Tag>,
        url_title: UrlTitle,
        status: PageStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Page {
            id,
            title,
            content,
            tags,
            url_title,
            status,
            created_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Update the title; the slug follows on the next save
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replace the tags; repeated tags collapse to the first occurrence
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = Tag::dedup(tags);
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the two pages have at least one tag in common
    pub fn shares_tag_with(&self, tags: &[Tag]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }

    /// The slug as of the most recent save
    pub fn url_title(&self) -> &UrlTitle {
        &self.url_title
    }

    /// Link path for this page, e.g. `/wiki/foo-bar`
    pub fn route(&self) -> String {
        self.url_title.route()
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PageStatus) {
        self.status = status;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Validate the current fields
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.title, &self.content)
    }

    /// Runs before every save: validates, then re-derives the slug from the title
    pub fn prepare_for_save(&mut self) -> Result<(), ValidationErrors> {
        self.check_invariants()?;
        self.url_title = UrlTitle::from_title(&self.title);
        Ok(())
    }
}

impl Entity for Page {
    type Id = PageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Page {
    fn check_invariants(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}
