use crate::application::repositories::{PageRepository, StoreError, StoreResult};
use crate::domain::aggregates::Page;
use crate::domain::base::Entity;
use crate::domain::value_objects::{PageId, PageStatus, Tag, UrlTitle};
use chrono::{DateTime, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result as SqliteResult, Row};

const PAGE_COLUMNS: &str = "p.id, p.title, p.content, p.url_title, p.status, p.created_at";

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// A `pages` row before its tags are attached
struct PageRow {
    id: String,
    title: String,
    content: String,
    url_title: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl PageRow {
    fn from_row(row: &Row<'_>) -> SqliteResult<Self> {
        Ok(PageRow {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            url_title: row.get(3)?,
            status: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn into_page(self, tags: Vec<String>) -> StoreResult<Page> {
        let corrupt = |reason: String| StoreError::CorruptRecord {
            id: self.id.clone(),
            reason,
        };

        let id = PageId::new(self.id.clone()).map_err(|e| corrupt(e.to_string()))?;
        let status = self
            .status
            .parse::<PageStatus>()
            .map_err(|e| corrupt(e.to_string()))?;
        let tags = tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt(e.to_string()))?;

        Ok(Page::restore(
            id,
            self.title,
            self.content,
            tags,
            UrlTitle::from_stored(self.url_title),
            status,
            self.created_at,
        ))
    }
}

/// SQLite-based implementation of the PageRepository trait
pub struct SqlitePageRepository {
    conn: Connection,
}

impl SqlitePageRepository {
    /// Create a new SQLite repository with the given connection
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        Ok(SqlitePageRepository { conn })
    }

    /// Create a new in-memory SQLite repository (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create a new file-based SQLite repository
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        let path = path.as_ref();
        tracing::info!("Opening page store at {}", path.display());
        Self::new(Connection::open(path)?)
    }

    /// Save a page and its tags in a single transaction
    fn save_page_transaction(&mut self, page: &Page) -> SqliteResult<()> {
        let tx = self.conn.transaction()?;

        // Upsert so an existing page keeps its rowid (and its place in the order)
        tx.execute(
            "INSERT INTO pages (id, title, content, url_title, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                url_title = excluded.url_title,
                status = excluded.status,
                updated_at = excluded.updated_at",
            params![
                page.id().as_str(),
                page.title(),
                page.content(),
                page.url_title().as_str(),
                page.status().as_str(),
                page.created_at(),
            ],
        )?;

        tx.execute(
            "DELETE FROM page_tags WHERE page_id = ?1",
            params![page.id().as_str()],
        )?;

        for (position, tag) in page.tags().iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO page_tags (page_id, tag, position) VALUES (?1, ?2, ?3)",
                params![page.id().as_str(), tag.as_str(), position as i64],
            )?;
        }

        tx.commit()
    }

    fn load_tags(&self, page_id: &str) -> SqliteResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT tag FROM page_tags WHERE page_id = ?1 ORDER BY position")?;
        let tags = stmt
            .query_map(params![page_id], |row| row.get(0))?
            .collect::<SqliteResult<Vec<String>>>()?;
        Ok(tags)
    }

    /// Run a page query and attach each page's tags.
    ///
    /// `filter` is appended after `FROM pages p`; results are in insertion order.
    fn load_pages<P>(&self, filter: &str, params: P) -> StoreResult<Vec<Page>>
    where
        P: rusqlite::Params,
    {
        let sql = format!(
            "SELECT {} FROM pages p {} ORDER BY p.rowid",
            PAGE_COLUMNS, filter
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params, PageRow::from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        rows.into_iter()
            .map(|row| {
                let tags = self.load_tags(&row.id)?;
                row.into_page(tags)
            })
            .collect()
    }
}

impl PageRepository for SqlitePageRepository {
    fn save(&mut self, page: &Page) -> StoreResult<()> {
        Ok(self.save_page_transaction(page)?)
    }

    fn find_by_id(&self, id: &PageId) -> StoreResult<Option<Page>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM pages p WHERE p.id = ?1", PAGE_COLUMNS),
                params![id.as_str()],
                PageRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let tags = self.load_tags(&row.id)?;
                Ok(Some(row.into_page(tags)?))
            }
            None => Ok(None),
        }
    }

    fn find_by_url_title(&self, url_title: &str) -> StoreResult<Option<Page>> {
        let mut pages = self.load_pages("WHERE p.url_title = ?1", params![url_title])?;
        if pages.is_empty() {
            Ok(None)
        } else {
            Ok(Some(pages.swap_remove(0)))
        }
    }

    fn find_all(&self) -> StoreResult<Vec<Page>> {
        self.load_pages("", [])
    }

    fn find_by_tag(&self, tag: &Tag) -> StoreResult<Vec<Page>> {
        self.load_pages(
            "WHERE EXISTS (SELECT 1 FROM page_tags t WHERE t.page_id = p.id AND t.tag = ?1)",
            params![tag.as_str()],
        )
    }

    fn find_sharing_tags(&self, tags: &[Tag], exclude: Option<&PageId>) -> StoreResult<Vec<Page>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        // ?1 is the excluded id; an empty string matches no page
        let placeholders = (0..tags.len())
            .map(|i| format!("?{}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let filter = format!(
            "WHERE p.id != ?1 AND EXISTS (
                SELECT 1 FROM page_tags t WHERE t.page_id = p.id AND t.tag IN ({})
             )",
            placeholders
        );

        let values = std::iter::once(exclude.map(PageId::as_str).unwrap_or(""))
            .chain(tags.iter().map(Tag::as_str));
        self.load_pages(&filter, params_from_iter(values))
    }

    fn delete(&mut self, id: &PageId) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM pages WHERE id = ?1", params![id.as_str()])?;

        Ok(rows_affected > 0)
    }

    fn delete_all(&mut self) -> StoreResult<usize> {
        Ok(self.conn.execute("DELETE FROM pages", [])?)
    }
}
