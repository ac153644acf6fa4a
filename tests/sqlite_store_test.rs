// Reading pages, chapters and verses from the bundled database
#![cfg(not(target_arch = "wasm32"))]

use mushaf_wasm::models::{LayoutStandard, Marker, Revelation};
use mushaf_wasm::session::{follow_page, LoadState, PageLoadTracker};
use mushaf_wasm::store::{QuranStore, SqliteStore, StoreError};
use mushaf_wasm::ReadingState;

const FIXTURE: &str = "
INSERT INTO pages (identifier, number, isRight) VALUES (1, 1, 1), (2, 2, 0);

INSERT INTO chapters (identifier, number, isMeccan, title, arabicTitle, englishTitle, titleCodePoint, searchableText)
VALUES (1, 1, 1, 'Al-Fatihah', 'الفاتحة', 'The Opening', 'E001', 'الفاتحة'),
       (2, 2, 0, 'Al-Baqarah', 'البقرة', 'The Cow', 'E002', 'البقرة');

INSERT INTO parts (identifier, number, arabicTitle, englishTitle) VALUES (1, 1, 'الجزء الأول', 'Part 1');
INSERT INTO quarters (identifier, hizbNumber, hizbFraction, arabicTitle, englishTitle, part_id)
VALUES (1, 1, 0, 'الحزب الأول', 'Hizb 1', 1);

INSERT INTO verses (verseID, humanReadableID, number, text, textWithoutTashkil, uthmanicHafsText, hafsSmartText,
    searchableText, chapter_id, part_id, quarter_id, page1441_id, page1405_id,
    marker1441_numberCodePoint, marker1441_line, marker1441_centerX, marker1441_centerY,
    marker1405_numberCodePoint, marker1405_line, marker1405_centerX, marker1405_centerY)
VALUES
    (1, '1:1', 1, 'بِسْمِ اللَّهِ', 'بسم الله', 'بِسۡمِ ٱللَّهِ', 'بِسۡمِ ٱللَّهِ', 'بسم الله', 1, 1, 1, 1, 1,
        'F001', 1, 0.2, 0.5, NULL, NULL, NULL, NULL),
    (2, '1:2', 2, 'الْحَمْدُ لِلَّهِ', 'الحمد لله', 'ٱلۡحَمۡدُ لِلَّهِ', 'ٱلۡحَمۡدُ لِلَّهِ', 'الحمد لله رب العالمين', 1, 1, 1, 1, 2,
        'F002', 2, 0.35, 0.48, 'F002', 0, 0.6, 0.5),
    (3, '2:1', 1, 'الم', 'الم', 'الٓمٓ', 'الٓمٓ', 'الم 100% سطر_اختبار', 2, 1, 1, 2, 2,
        NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL);

INSERT INTO page_headers (page_id, part_id, quarter_id, layout_type)
VALUES (1, 1, 1, 1441), (1, 1, 1, 1405);

INSERT INTO chapter_headers (id, chapter_id, page_id, line, centerX, centerY, layout_type)
VALUES (1, 1, 1, 0, 0.5, 0.5, 1441),
       (2, 2, 2, 5, 0.5, 0.5, 1441),
       (3, 2, 2, 0, 0.5, 0.55, 1441),
       (4, 1, 1, 0, 0.5, 0.5, 1405);

INSERT INTO verse_highlights (line, left_position, right_position, verse_id, layout_type)
VALUES (2, 0.35, 1.0, 2, 1441),
       (1, 0.0, 0.2, 2, 1441),
       (1, 0.2, 1.0, 1, 1441),
       (0, 0.6, 1.0, 2, 1405),
       (0, 0.1, 0.6, 2, 1405);
";

fn store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    store.connection().execute_batch(FIXTURE).unwrap();
    store
}

#[test]
fn test_page_carries_both_standards() {
    let page = store().page_by_number(1).unwrap().unwrap();

    assert_eq!(page.number, 1);
    assert!(page.is_right);
    assert_eq!(page.header1441.as_ref().and_then(|h| h.part_id), Some(1));
    assert!(page.header1405.is_some());

    let ids_1441: Vec<u32> = page.verses(LayoutStandard::Standard1441).iter().map(|v| v.verse_id).collect();
    let ids_1405: Vec<u32> = page.verses(LayoutStandard::Alternative1405).iter().map(|v| v.verse_id).collect();
    assert_eq!(ids_1441, vec![1, 2]);
    assert_eq!(ids_1405, vec![1]);

    assert_eq!(page.chapter_headers1441.len(), 1);
    assert_eq!(page.chapter_headers1405.len(), 1);
    assert_eq!(page.leading_chapter(), Some(1));
}

#[test]
fn test_marker_columns_become_sum_type() {
    let page = store().page_by_number(1).unwrap().unwrap();
    let first = &page.verses1441[0];

    assert_eq!(
        first.marker1441,
        Marker::Present { line: 1, center_x: 0.2, center_y: 0.5, number_code_point: Some("F001".to_string()) }
    );
    assert_eq!(first.marker1405, Marker::Absent);

    let continued = store().page_by_number(2).unwrap().unwrap();
    assert!(!continued.verses1441[0].marker1441.is_present());
}

#[test]
fn test_child_rows_are_ordered() {
    let page = store().page_by_number(2).unwrap().unwrap();
    let lines: Vec<u32> = page.chapter_headers1441.iter().map(|h| h.line).collect();
    assert_eq!(lines, vec![0, 5]);

    let page = store().page_by_number(1).unwrap().unwrap();
    let spans = &page.verses1441[1].highlights1441;
    assert_eq!(spans.iter().map(|h| h.line).collect::<Vec<_>>(), vec![1, 2]);

    // Same line keeps insertion order
    let verse = store().page_by_number(2).unwrap().unwrap();
    let alt = &verse.verses1405[0];
    assert_eq!(alt.verse_id, 2);
    let lefts: Vec<f64> = alt.highlights1405.iter().map(|h| h.left_position).collect();
    assert_eq!(lefts, vec![0.6, 0.1]);
}

#[test]
fn test_missing_page_is_not_an_error() {
    let store = store();
    assert_eq!(store.page_by_number(605).unwrap(), None);

    let err = store.require_page(605).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_broken_database_is_an_error() {
    let store = store();
    store.connection().execute_batch("DROP TABLE verse_highlights;").unwrap();

    let err = store.page_by_number(1).unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)), "{:?}", err);
    assert!(!err.is_not_found());
}

#[test]
fn test_chapter_lookup() {
    let store = store();
    let chapter = store.chapter_by_number(2).unwrap().unwrap();

    assert_eq!(chapter.english_title, "The Cow");
    assert_eq!(chapter.revelation(), Revelation::Medinan);
    assert_eq!(chapter.searchable_keywords, None);
    assert_eq!(store.chapter_by_number(1).unwrap().unwrap().revelation(), Revelation::Meccan);
    assert!(store.chapter_by_number(115).unwrap().is_none());
}

#[test]
fn test_verses_by_chapter() {
    let store = store();
    let verses = store.verses_by_chapter(1).unwrap();

    assert_eq!(verses.iter().map(|v| v.number).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(verses[1].highlights1441.len(), 2);
    assert!(store.verses_by_chapter(50).unwrap().is_empty());
}

#[test]
fn test_search() {
    let store = store();

    let hits = store.search_verses("الله").unwrap();
    assert_eq!(hits.iter().map(|v| v.verse_id).collect::<Vec<_>>(), vec![1]);

    assert_eq!(store.search_verses("  العالمين ").unwrap().len(), 1);
    assert!(store.search_verses("   ").unwrap().is_empty());

    // Wildcards match literally
    assert_eq!(store.search_verses("100%").unwrap().len(), 1);
    assert_eq!(store.search_verses("سطر_").unwrap().len(), 1);
    assert_eq!(store.search_verses("%").unwrap().len(), 1);
    assert_eq!(store.search_verses("_").unwrap().len(), 1);
}

#[test]
fn test_parts_and_quarters() {
    let store = store();

    let part = store.part_by_id(1).unwrap().unwrap();
    assert_eq!(part.english_title, "Part 1");

    let quarter = store.quarter_by_id(1).unwrap().unwrap();
    assert_eq!(quarter.hizb_number, 1);
    assert_eq!(quarter.part_id, Some(1));

    assert!(store.part_by_id(31).unwrap().is_none());
    assert!(store.quarter_by_id(241).unwrap().is_none());
}

#[test]
fn test_following_pages_switches_chapter() {
    let store = store();
    let mut state = ReadingState::new();

    assert!(!follow_page(&store, &mut state, 1).unwrap());
    assert_eq!(state.current_chapter, 1);

    assert!(follow_page(&store, &mut state, 2).unwrap());
    assert_eq!(state.current_page, 2);
    assert_eq!(state.current_chapter, 2);

    // Unknown page: the page changes, the chapter stays
    assert!(!follow_page(&store, &mut state, 300).unwrap());
    assert_eq!(state.current_page, 300);
    assert_eq!(state.current_chapter, 2);
}

#[test]
fn test_page_load_against_store() {
    let store = store();
    let mut tracker = PageLoadTracker::new();

    assert!(matches!(tracker.load(&store, 2), LoadState::Loaded { .. }));
    assert_eq!(tracker.state().page().map(|p| p.number), Some(2));

    assert_eq!(tracker.load(&store, 603), &LoadState::NotFound { page_number: 603 });
    assert!(tracker.state().is_retryable());
}

#[test]
fn test_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quran.sqlite");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.connection().execute_batch(FIXTURE).unwrap();
    }

    let store = SqliteStore::open_read_only(&path).unwrap();
    let page = store.page_by_number(2).unwrap().unwrap();
    assert_eq!(page.verses1441.len(), 1);
    assert!(store.connection().execute_batch("DELETE FROM pages;").is_err());
}
