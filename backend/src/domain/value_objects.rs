/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Unique identifier for a Page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidValue("PageId cannot be empty".to_string()));
        }
        Ok(PageId(id))
    }

    /// Assign a fresh identifier for a page that is being created
    pub fn generate() -> Self {
        PageId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PageId {}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

/// A categorization label attached to a page.
///
/// Tags compare exactly: no case folding, no trimming beyond rejecting blanks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(DomainError::InvalidValue("Tag cannot be empty".to_string()));
        }
        Ok(Tag(label))
    }

    /// Build a tag list, dropping repeated labels but keeping first-seen order
    pub fn list<I, S>(labels: I) -> DomainResult<Vec<Tag>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = labels
            .into_iter()
            .map(Tag::new)
            .collect::<DomainResult<Vec<Tag>>>()?;
        Ok(Tag::dedup(tags))
    }

    /// Drop repeated tags, keeping the first occurrence of each
    pub fn dedup(tags: impl IntoIterator<Item = Tag>) -> Vec<Tag> {
        let mut unique: Vec<Tag> = Vec::new();
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        unique
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Tag {}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// Turns page titles into URL-safe slugs
#[derive(Debug)]
struct Slugger {
    whitespace_regex: Regex,
    unsafe_regex: Regex,
    dash_run_regex: Regex,
}

impl Slugger {
    fn instance() -> &'static Self {
        static INSTANCE: OnceLock<Slugger> = OnceLock::new();
        INSTANCE.get_or_init(|| Slugger {
            whitespace_regex: Regex::new(r"\s+").expect("whitespace pattern is valid"),
            // Anything that is not a letter, mark, digit, dash or underscore
            unsafe_regex: Regex::new(r"[^\p{Alphabetic}\p{M}\p{Nd}_-]")
                .expect("unsafe pattern is valid"),
            dash_run_regex: Regex::new(r"-{2,}").expect("dash pattern is valid"),
        })
    }

    fn slugify(&self, title: &str) -> String {
        // Composed and decomposed spellings of a title share one slug
        let composed: String = title.trim().nfc().collect();
        let lowered = composed.to_lowercase();
        let dashed = self.whitespace_regex.replace_all(&lowered, "-");
        let safe = self.unsafe_regex.replace_all(&dashed, "");
        let collapsed = self.dash_run_regex.replace_all(&safe, "-");
        collapsed.trim_matches('-').to_string()
    }
}

/// URL-safe slug derived from a page title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UrlTitle(String);

impl UrlTitle {
    /// Slug used when a title has no URL-safe characters at all
    pub const FALLBACK: &'static str = "untitled";

    pub fn from_title(title: &str) -> Self {
        let slug = Slugger::instance().slugify(title);
        if slug.is_empty() {
            UrlTitle(Self::FALLBACK.to_string())
        } else {
            UrlTitle(slug)
        }
    }

    /// Wrap a slug that was previously derived and stored
    pub(crate) fn from_stored(slug: impl Into<String>) -> Self {
        UrlTitle(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The wiki path for this slug
    pub fn route(&self) -> String {
        format!("/wiki/{}", self.0)
    }
}

impl ValueObject for UrlTitle {}

impl fmt::Display for UrlTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a page is open for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Open,
    Closed,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Open => "open",
            PageStatus::Closed => "closed",
        }
    }
}

impl ValueObject for PageStatus {}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(PageStatus::Open),
            "closed" => Ok(PageStatus::Closed),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown page status: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_creation() {
        let id = PageId::new("test-page").unwrap();
        assert_eq!(id.as_str(), "test-page");

        let empty_id = PageId::new("");
        assert!(empty_id.is_err());
    }

    #[test]
    fn test_generated_page_ids_are_unique() {
        let a = PageId::generate();
        let b = PageId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_tag_creation() {
        let tag = Tag::new("animal").unwrap();
        assert_eq!(tag.as_str(), "animal");
        assert_eq!(tag.to_string(), "animal");

        assert!(Tag::new("").is_err());
        assert!(Tag::new("  ").is_err());
    }

    #[test]
    fn test_tags_match_exactly() {
        assert_ne!(Tag::new("Dog").unwrap(), Tag::new("dog").unwrap());
        assert_ne!(Tag::new("do").unwrap(), Tag::new("dog").unwrap());
    }

    #[test]
    fn test_tag_list_drops_duplicates_in_order() {
        let tags = Tag::list(["foo", "bar", "foo"]).unwrap();
        let labels: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(labels, vec!["foo", "bar"]);

        assert!(Tag::list(["foo", ""]).is_err());
    }

    #[test]
    fn test_tag_dedup_keeps_first_occurrence() {
        let dog = Tag::new("dog").unwrap();
        let cat = Tag::new("cat").unwrap();
        let tags = Tag::dedup(vec![dog.clone(), cat.clone(), dog.clone()]);
        assert_eq!(tags, vec![dog, cat]);
    }

    #[test]
    fn test_url_title_from_title() {
        assert_eq!(UrlTitle::from_title("Foo Bar").as_str(), "foo-bar");
        assert_eq!(UrlTitle::from_title("  Hello,   World! ").as_str(), "hello-world");
        assert_eq!(UrlTitle::from_title("snake_case stays").as_str(), "snake_case-stays");
        assert_eq!(UrlTitle::from_title("Café Olé").as_str(), "café-olé");
        assert_eq!(UrlTitle::from_title("a - b").as_str(), "a-b");
    }

    #[test]
    fn test_url_title_ignores_unicode_composition() {
        let composed = UrlTitle::from_title("Caf\u{e9}");
        let decomposed = UrlTitle::from_title("Cafe\u{301}");
        assert_eq!(composed, decomposed);
        assert_eq!(composed.as_str(), "caf\u{e9}");
    }

    #[test]
    fn test_url_title_is_stable() {
        let first = UrlTitle::from_title("The Same Title");
        let second = UrlTitle::from_title("The Same Title");
        assert_eq!(first, second);
    }

    #[test]
    fn test_url_title_fallback() {
        assert_eq!(UrlTitle::from_title("?!").as_str(), UrlTitle::FALLBACK);
    }

    #[test]
    fn test_route() {
        assert_eq!(UrlTitle::from_title("Foo Bar").route(), "/wiki/foo-bar");
    }

    #[test]
    fn test_page_status_round_trip() {
        assert_eq!(PageStatus::default(), PageStatus::Open);
        assert_eq!("closed".parse::<PageStatus>().unwrap(), PageStatus::Closed);
        assert_eq!(PageStatus::Open.to_string(), "open");
        assert!("archived".parse::<PageStatus>().is_err());
    }
}
