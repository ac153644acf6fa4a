// Following recitation audio with verse highlights

use mushaf_wasm::models::{Page, Verse};
use mushaf_wasm::page_layout::{LayoutEngine, ProjectionOptions};
use mushaf_wasm::recitation::{PlaybackSample, TimingTable};
use mushaf_wasm::session::ReaderSession;
use mushaf_wasm::RecitationConfig;

const TIMING_JSON: &str = r#"{
    "chapters": [
        {"id": 1, "aya_timing": [
            {"ayah": 1, "start_time": 0, "end_time": 2000},
            {"ayah": 2, "start_time": 2000, "end_time": 5000}
        ]},
        {"id": 2, "aya_timing": [
            {"ayah": 1, "start_time": 0, "end_time": 9000},
            {"ayah": 2, "start_time": 9000, "end_time": 15000}
        ]}
    ]
}"#;

fn playing(position_secs: f64) -> PlaybackSample {
    PlaybackSample { playing: true, position_secs }
}

#[test]
fn test_interval_boundaries() {
    let table = TimingTable::from_json(TIMING_JSON).unwrap();
    let chapter = table.chapter(1).unwrap();

    assert_eq!(chapter.verse_at(1999), Some(1));
    assert_eq!(chapter.verse_at(2000), Some(2));
    assert_eq!(chapter.verse_at(4999), Some(2));
    assert_eq!(chapter.verse_at(5000), None);
}

#[test]
fn test_playback_moves_active_verse() {
    let mut session = ReaderSession::new(RecitationConfig::default());
    session.set_timing_table(TimingTable::from_json(TIMING_JSON).unwrap());

    assert_eq!(session.poll(playing(0.5)), Some(1));
    assert_eq!(session.poll(playing(1.0)), None);
    assert_eq!(session.poll(playing(2.0)), Some(2));
    assert!(session.state().is_playing);

    // Past the last interval the highlight stays where it was
    assert_eq!(session.poll(playing(7.0)), None);
    assert_eq!(session.state().active_verse, Some(2));
}

#[test]
fn test_pause_keeps_verse() {
    let mut session = ReaderSession::default();
    session.set_timing_table(TimingTable::from_json(TIMING_JSON).unwrap());
    session.poll(playing(3.0));

    let sample = PlaybackSample { playing: false, position_secs: 0.5 };
    assert_eq!(session.poll(sample), None);
    assert!(!session.state().is_playing);
    assert_eq!(session.state().active_verse, Some(2));
}

#[test]
fn test_bad_positions_are_ignored() {
    let mut session = ReaderSession::default();
    session.set_timing_table(TimingTable::from_json(TIMING_JSON).unwrap());

    assert_eq!(session.poll(playing(f64::NAN)), None);
    assert_eq!(session.poll(playing(-1.0)), None);
    assert_eq!(session.state().active_verse, None);
}

#[test]
fn test_no_timing_leaves_verse_unset() {
    let mut session = ReaderSession::default();
    assert_eq!(session.poll(playing(1.0)), None);
    assert_eq!(session.state().active_verse, None);
    assert!(session.state().is_playing);
}

#[test]
fn test_chapter_switch_resets_verse_and_audio() {
    let mut session = ReaderSession::default();
    session.set_timing_table(TimingTable::from_json(TIMING_JSON).unwrap());
    session.poll(playing(3.0));

    assert!(session.set_current_chapter(2));
    assert_eq!(session.state().active_verse, None);
    assert!(session.audio_url().ends_with("/002.mp3"));

    assert_eq!(session.poll(playing(10.0)), Some(2));
    assert_eq!(session.state().active_verse_key(), Some((2, 2)));
}

#[test]
fn test_recited_verse_is_highlighted() {
    let mut session = ReaderSession::default();
    session.set_timing_table(TimingTable::from_json(TIMING_JSON).unwrap());

    let page = Page {
        number: 1,
        verses1441: vec![
            Verse {
                verse_id: 1,
                number: 1,
                chapter_id: Some(1),
                highlights1441: vec![mushaf_wasm::Highlight::new(1, 0.1, 0.9)],
                ..Default::default()
            },
            Verse {
                verse_id: 2,
                number: 2,
                chapter_id: Some(1),
                highlights1441: vec![mushaf_wasm::Highlight::new(2, 0.3, 0.9)],
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    session.follow_page(&page);
    session.poll(playing(2.5));

    let options = ProjectionOptions {
        selection: session.active_selection(),
        ..Default::default()
    };
    let layout = LayoutEngine::default().compute_layout(&page, 400.0, &options);

    assert!(layout.lines[1].highlights.is_empty());
    assert_eq!(layout.lines[2].highlights.len(), 1);
    assert_eq!(layout.lines[2].highlights[0].verse_id, 2);
}
