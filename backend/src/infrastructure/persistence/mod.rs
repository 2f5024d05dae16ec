mod in_memory_page_repository;
mod schema;
mod sqlite_page_repository;

pub use in_memory_page_repository::InMemoryPageRepository;
pub use schema::initialize_database;
pub use sqlite_page_repository::SqlitePageRepository;
