//! Database schema
//!
//! Page-bound child rows (page headers, chapter headers, highlight spans)
//! carry a `layout_type` column holding 1441 or 1405. Verse markers are
//! flattened into the verse row, one column group per standard.

/// Creates every table the store reads, leaving existing ones alone
pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS pages (
    identifier INTEGER PRIMARY KEY AUTOINCREMENT,
    number INTEGER NOT NULL,
    isRight INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS chapters (
    identifier INTEGER PRIMARY KEY AUTOINCREMENT,
    number INTEGER NOT NULL,
    isMeccan INTEGER NOT NULL DEFAULT 0,
    title TEXT NOT NULL,
    arabicTitle TEXT NOT NULL,
    englishTitle TEXT NOT NULL,
    titleCodePoint TEXT NOT NULL,
    searchableText TEXT,
    searchableKeywords TEXT
);

CREATE TABLE IF NOT EXISTS parts (
    identifier INTEGER PRIMARY KEY AUTOINCREMENT,
    number INTEGER NOT NULL,
    arabicTitle TEXT NOT NULL,
    englishTitle TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS quarters (
    identifier INTEGER PRIMARY KEY AUTOINCREMENT,
    hizbNumber INTEGER NOT NULL,
    hizbFraction INTEGER NOT NULL,
    arabicTitle TEXT NOT NULL,
    englishTitle TEXT NOT NULL,
    part_id INTEGER,
    FOREIGN KEY (part_id) REFERENCES parts(identifier)
);

CREATE TABLE IF NOT EXISTS verses (
    verseID INTEGER PRIMARY KEY AUTOINCREMENT,
    humanReadableID TEXT NOT NULL,
    number INTEGER NOT NULL,
    text TEXT NOT NULL,
    textWithoutTashkil TEXT NOT NULL,
    uthmanicHafsText TEXT NOT NULL,
    hafsSmartText TEXT NOT NULL,
    searchableText TEXT NOT NULL,
    chapter_id INTEGER,
    part_id INTEGER,
    quarter_id INTEGER,
    section_id INTEGER,
    page1441_id INTEGER,
    page1405_id INTEGER,
    marker1441_numberCodePoint TEXT,
    marker1441_line INTEGER,
    marker1441_centerX REAL,
    marker1441_centerY REAL,
    marker1405_numberCodePoint TEXT,
    marker1405_line INTEGER,
    marker1405_centerX REAL,
    marker1405_centerY REAL,
    FOREIGN KEY (chapter_id) REFERENCES chapters(identifier),
    FOREIGN KEY (part_id) REFERENCES parts(identifier),
    FOREIGN KEY (quarter_id) REFERENCES quarters(identifier)
);

CREATE TABLE IF NOT EXISTS page_headers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    page_id INTEGER NOT NULL,
    part_id INTEGER,
    quarter_id INTEGER,
    layout_type INTEGER NOT NULL DEFAULT 1441,
    FOREIGN KEY (page_id) REFERENCES pages(identifier),
    FOREIGN KEY (part_id) REFERENCES parts(identifier),
    FOREIGN KEY (quarter_id) REFERENCES quarters(identifier)
);

CREATE TABLE IF NOT EXISTS chapter_headers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    chapter_id INTEGER,
    page_id INTEGER NOT NULL,
    line INTEGER NOT NULL,
    centerX REAL NOT NULL,
    centerY REAL NOT NULL,
    layout_type INTEGER NOT NULL DEFAULT 1441,
    FOREIGN KEY (chapter_id) REFERENCES chapters(identifier),
    FOREIGN KEY (page_id) REFERENCES pages(identifier)
);

CREATE TABLE IF NOT EXISTS verse_highlights (
    line INTEGER NOT NULL,
    left_position REAL NOT NULL,
    right_position REAL NOT NULL,
    verse_id INTEGER NOT NULL,
    layout_type INTEGER NOT NULL DEFAULT 1441,
    FOREIGN KEY (verse_id) REFERENCES verses(verseID)
);

CREATE INDEX IF NOT EXISTS idx_pages_number ON pages(number);
CREATE INDEX IF NOT EXISTS idx_chapters_number ON chapters(number);
CREATE INDEX IF NOT EXISTS idx_verses_page1441 ON verses(page1441_id);
CREATE INDEX IF NOT EXISTS idx_verses_page1405 ON verses(page1405_id);
CREATE INDEX IF NOT EXISTS idx_verses_chapter ON verses(chapter_id);
CREATE INDEX IF NOT EXISTS idx_highlights_verse ON verse_highlights(verse_id, layout_type);
CREATE INDEX IF NOT EXISTS idx_chapter_headers_page ON chapter_headers(page_id, layout_type);
";

/// Column list shared by every verse query, in `VerseRow` order
pub const VERSE_COLUMNS: &str = "verseID, humanReadableID, number, text, textWithoutTashkil, \
    uthmanicHafsText, hafsSmartText, searchableText, chapter_id, part_id, quarter_id, section_id, \
    page1441_id, page1405_id, \
    marker1441_numberCodePoint, marker1441_line, marker1441_centerX, marker1441_centerY, \
    marker1405_numberCodePoint, marker1405_line, marker1405_centerX, marker1405_centerY";

pub const CHAPTER_COLUMNS: &str = "identifier, number, isMeccan, title, arabicTitle, englishTitle, \
    titleCodePoint, searchableText, searchableKeywords";

/// Most rows a text search returns
pub const SEARCH_LIMIT: u32 = 100;
