pub mod page_commands;
pub mod tag_queries;

pub use page_commands::{CreatePage, SavePage};
pub use tag_queries::{FindPagesByTag, FindSimilarPages, SimilarTo};
