use crate::domain::{
    aggregates::Page,
    base::Entity,
    value_objects::{PageId, PageStatus, Tag, UrlTitle},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The document shape of a page as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub id: PageId,
    pub title: String,
    pub content: String,
    pub tags: Vec<Tag>,
    pub url_title: UrlTitle,
    /// `/wiki/<urlTitle>`
    pub route: String,
    pub status: PageStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Page> for PageDocument {
    fn from(page: &Page) -> Self {
        PageDocument {
            id: page.id().clone(),
            title: page.title().to_string(),
            content: page.content().to_string(),
            tags: page.tags().to_vec(),
            url_title: page.url_title().clone(),
            route: page.route(),
            status: page.status(),
            created_at: page.created_at(),
        }
    }
}
