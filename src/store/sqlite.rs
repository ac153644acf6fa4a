//! SQLite-backed store
//!
//! Reads the bundled database with parameterized queries. Verse rows are
//! inflated into [`Verse`] values: flattened marker columns become a
//! [`Marker`], and highlight spans are read from their child table.

use std::path::Path;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use crate::models::*;
use super::schema::{self, CHAPTER_COLUMNS, SEARCH_LIMIT, VERSE_COLUMNS};
use super::{QuranStore, StoreError};

/// Store over a single SQLite connection, opened once
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        log::info!("Opening page store at {}", path.display());
        let store = Self { conn: Connection::open(path)? };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open a prebuilt database without ever writing to it
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        log::info!("Opening page store read-only at {}", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.initialize_schema()?;
        Ok(store)
    }

    pub fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(())
    }

    /// Underlying connection, for loading fixtures and maintenance
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn page_header(&self, page_id: u32, standard: LayoutStandard) -> Result<Option<PageHeader>, StoreError> {
        let header = self
            .conn
            .prepare_cached(
                "SELECT id, part_id, quarter_id FROM page_headers \
                 WHERE page_id = ?1 AND layout_type = ?2 LIMIT 1",
            )?
            .query_row(params![page_id, standard.code()], |row| {
                Ok(PageHeader {
                    id: row.get(0)?,
                    part_id: row.get(1)?,
                    quarter_id: row.get(2)?,
                })
            })
            .optional()?;
        Ok(header)
    }

    fn chapter_headers(&self, page_id: u32, standard: LayoutStandard) -> Result<Vec<ChapterHeader>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, chapter_id, line, centerX, centerY FROM chapter_headers \
             WHERE page_id = ?1 AND layout_type = ?2 ORDER BY line ASC, id ASC",
        )?;
        let headers = stmt
            .query_map(params![page_id, standard.code()], |row| {
                Ok(ChapterHeader {
                    id: row.get(0)?,
                    chapter_id: row.get(1)?,
                    line: row.get(2)?,
                    center_x: row.get(3)?,
                    center_y: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(headers)
    }

    fn highlights(&self, verse_id: u32, standard: LayoutStandard) -> Result<Vec<Highlight>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT line, left_position, right_position FROM verse_highlights \
             WHERE verse_id = ?1 AND layout_type = ?2 ORDER BY line ASC, rowid ASC",
        )?;
        let spans = stmt
            .query_map(params![verse_id, standard.code()], |row| {
                Ok(Highlight {
                    line: row.get(0)?,
                    left_position: row.get(1)?,
                    right_position: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(spans)
    }

    /// Run a verse query and attach both standards' highlight spans
    fn inflate_verses<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Verse>, StoreError> {
        let mut verses = {
            let mut stmt = self.conn.prepare_cached(sql)?;
            let rows = stmt.query_map(params, verse_from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        };

        for verse in &mut verses {
            verse.highlights1441 = self.highlights(verse.verse_id, LayoutStandard::Standard1441)?;
            verse.highlights1405 = self.highlights(verse.verse_id, LayoutStandard::Alternative1405)?;
        }

        Ok(verses)
    }

    fn verses_on_page(&self, page_id: u32, standard: LayoutStandard) -> Result<Vec<Verse>, StoreError> {
        let column = match standard {
            LayoutStandard::Standard1441 => "page1441_id",
            LayoutStandard::Alternative1405 => "page1405_id",
        };
        let sql = format!(
            "SELECT {} FROM verses WHERE {} = ?1 ORDER BY verseID ASC",
            VERSE_COLUMNS, column
        );
        self.inflate_verses(&sql, params![page_id])
    }
}

impl QuranStore for SqliteStore {
    fn page_by_number(&self, number: u32) -> Result<Option<Page>, StoreError> {
        let row = self
            .conn
            .prepare_cached("SELECT identifier, number, isRight FROM pages WHERE number = ?1 LIMIT 1")?
            .query_row(params![number], |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?, row.get::<_, bool>(2)?))
            })
            .optional()?;

        let Some((identifier, number, is_right)) = row else {
            log::debug!("Page {} not in store", number);
            return Ok(None);
        };

        let page = Page {
            identifier,
            number,
            is_right,
            header1441: self.page_header(identifier, LayoutStandard::Standard1441)?,
            header1405: self.page_header(identifier, LayoutStandard::Alternative1405)?,
            chapter_headers1441: self.chapter_headers(identifier, LayoutStandard::Standard1441)?,
            chapter_headers1405: self.chapter_headers(identifier, LayoutStandard::Alternative1405)?,
            verses1441: self.verses_on_page(identifier, LayoutStandard::Standard1441)?,
            verses1405: self.verses_on_page(identifier, LayoutStandard::Alternative1405)?,
        };

        log::debug!(
            "Loaded page {} ({} verses in 1441, {} in 1405)",
            page.number,
            page.verses1441.len(),
            page.verses1405.len()
        );
        Ok(Some(page))
    }

    fn chapter_by_number(&self, number: u32) -> Result<Option<Chapter>, StoreError> {
        let sql = format!("SELECT {} FROM chapters WHERE number = ?1 LIMIT 1", CHAPTER_COLUMNS);
        let chapter = self
            .conn
            .prepare_cached(&sql)?
            .query_row(params![number], chapter_from_row)
            .optional()?;
        Ok(chapter)
    }

    fn verses_by_chapter(&self, chapter_number: u32) -> Result<Vec<Verse>, StoreError> {
        let sql = format!(
            "SELECT {} FROM verses \
             WHERE chapter_id = (SELECT identifier FROM chapters WHERE number = ?1) \
             ORDER BY number ASC",
            VERSE_COLUMNS
        );
        self.inflate_verses(&sql, params![chapter_number])
    }

    fn search_verses(&self, query: &str) -> Result<Vec<Verse>, StoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} FROM verses WHERE searchableText LIKE ?1 ESCAPE '\\' \
             ORDER BY chapter_id ASC, number ASC LIMIT ?2",
            VERSE_COLUMNS
        );
        let pattern = format!("%{}%", escape_like(query));
        self.inflate_verses(&sql, params![pattern, SEARCH_LIMIT])
    }

    fn part_by_id(&self, identifier: u32) -> Result<Option<Part>, StoreError> {
        let part = self
            .conn
            .prepare_cached(
                "SELECT identifier, number, arabicTitle, englishTitle FROM parts WHERE identifier = ?1",
            )?
            .query_row(params![identifier], |row| {
                Ok(Part {
                    identifier: row.get(0)?,
                    number: row.get(1)?,
                    arabic_title: row.get(2)?,
                    english_title: row.get(3)?,
                })
            })
            .optional()?;
        Ok(part)
    }

    fn quarter_by_id(&self, identifier: u32) -> Result<Option<Quarter>, StoreError> {
        let quarter = self
            .conn
            .prepare_cached(
                "SELECT identifier, hizbNumber, hizbFraction, arabicTitle, englishTitle, part_id \
                 FROM quarters WHERE identifier = ?1",
            )?
            .query_row(params![identifier], |row| {
                Ok(Quarter {
                    identifier: row.get(0)?,
                    hizb_number: row.get(1)?,
                    hizb_fraction: row.get(2)?,
                    arabic_title: row.get(3)?,
                    english_title: row.get(4)?,
                    part_id: row.get(5)?,
                })
            })
            .optional()?;
        Ok(quarter)
    }
}

/// Map a row selected with `VERSE_COLUMNS`; highlights are filled in later
fn verse_from_row(row: &Row<'_>) -> rusqlite::Result<Verse> {
    Ok(Verse {
        verse_id: row.get(0)?,
        human_readable_id: row.get(1)?,
        number: row.get(2)?,
        text: row.get(3)?,
        text_without_tashkil: row.get(4)?,
        uthmanic_hafs_text: row.get(5)?,
        hafs_smart_text: row.get(6)?,
        searchable_text: row.get(7)?,
        chapter_id: row.get(8)?,
        part_id: row.get(9)?,
        quarter_id: row.get(10)?,
        section_id: row.get(11)?,
        page1441_id: row.get(12)?,
        page1405_id: row.get(13)?,
        marker1441: Marker::from_columns(row.get(14)?, row.get(15)?, row.get(16)?, row.get(17)?),
        marker1405: Marker::from_columns(row.get(18)?, row.get(19)?, row.get(20)?, row.get(21)?),
        highlights1441: Vec::new(),
        highlights1405: Vec::new(),
    })
}

fn chapter_from_row(row: &Row<'_>) -> rusqlite::Result<Chapter> {
    Ok(Chapter {
        identifier: row.get(0)?,
        number: row.get(1)?,
        is_meccan: row.get(2)?,
        title: row.get(3)?,
        arabic_title: row.get(4)?,
        english_title: row.get(5)?,
        title_code_point: row.get(6)?,
        searchable_text: row.get(7)?,
        searchable_keywords: row.get(8)?,
    })
}

/// Escape LIKE wildcards so the query matches literally
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_schema_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize_schema().unwrap();
        assert_eq!(store.page_by_number(1).unwrap(), None);
    }
}
