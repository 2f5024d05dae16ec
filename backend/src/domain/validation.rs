/// Field-keyed validation results for page documents
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A page field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageField {
    Title,
    Content,
}

impl PageField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageField::Title => "title",
            PageField::Content => "content",
        }
    }
}

impl fmt::Display for PageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every field that failed validation, with the reason it failed.
///
/// Callers inspect individual fields with [`ValidationErrors::has`] rather than
/// matching on the error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<PageField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`; the first reason recorded for a field wins
    pub fn add(&mut self, field: PageField, reason: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| reason.into());
    }

    pub fn has(&self, field: PageField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn get(&self, field: PageField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = PageField> + '_ {
        self.errors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .errors
            .iter()
            .map(|(field, reason)| format!("{}: {}", field, reason))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "page validation failed: {}", summary)
    }
}

impl std::error::Error for ValidationErrors {}

/// Add a "required" failure for `field` when `value` is blank
pub(crate) fn require(errors: &mut ValidationErrors, field: PageField, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("Path `{}` is required.", field));
    }
}
