pub mod page;

pub use page::PageDocument;
