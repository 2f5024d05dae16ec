/// Domain events
use super::base::DomainEvent;
use super::value_objects::{PageId, UrlTitle};

/// Something that happened to the page collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A page was validated and stored for the first time
    Created { page_id: PageId, url_title: UrlTitle },
    /// An existing page was saved again
    Updated { page_id: PageId, url_title: UrlTitle },
    /// A single page was removed
    Removed { page_id: PageId },
    /// The whole collection was cleared
    Cleared { pages_removed: usize },
}

impl DomainEvent for PageEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PageEvent::Created { .. } => "PageCreated",
            PageEvent::Updated { .. } => "PageUpdated",
            PageEvent::Removed { .. } => "PageRemoved",
            PageEvent::Cleared { .. } => "PagesCleared",
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            PageEvent::Created { page_id, .. }
            | PageEvent::Updated { page_id, .. }
            | PageEvent::Removed { page_id } => page_id.as_str().to_string(),
            PageEvent::Cleared { .. } => "*".to_string(),
        }
    }
}
