/*
 *  tests/board_integration.rs
 *
 *  End-to-end board tests against the mock driver
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 */

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use ekiban::board::BoardState;
use ekiban::display::drivers::mock::MockDriver;
use ekiban::display::face::Face;
use ekiban::display::framebuffer::FrameBuffer;
use ekiban::display::palette::Color;
use ekiban::display::traits::MatrixDriver;
use ekiban::font::GlyphFont;
use ekiban::messages::ScrollMessage;

const W: u32 = 128;
const H: u32 = 32;

// digits, colon and space as solid 6x8 blocks; enough glyph coverage for
// pixel-level assertions without shipping a font file
fn test_font() -> GlyphFont {
    let mut bdf = String::from(
        "STARTFONT 2.1\nFONT test\nSIZE 8 75 75\nFONTBOUNDINGBOX 6 8 0 0\nCHARS 12\n",
    );
    for code in (48u32..=58).chain([32]) {
        bdf.push_str(&format!(
            "STARTCHAR c{code}\nENCODING {code}\nDWIDTH 6 0\nBBX 6 8 0 0\nBITMAP\n"
        ));
        let row = if code == 32 { "00\n" } else { "FC\n" };
        bdf.push_str(&row.repeat(8));
        bdf.push_str("ENDCHAR\n");
    }
    bdf.push_str("ENDFONT\n");
    GlyphFont::parse(&bdf).unwrap()
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 30)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn write_json(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_first_iteration_reloads_and_presents() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "departure.json",
        r#"{"東京": {"departure_time": "13:00", "status": "",
             "segments": [{"type": "快速", "destination": "東京"}]}}"#,
    );

    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);
    let mut driver = MockDriver::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();
    driver.present(&frame).unwrap();

    // first iteration reloaded unconditionally and composed the list
    assert!(!board.messages.is_empty());
    assert!(board.messages[0].text.starts_with("本日は"));
    assert_eq!(driver.state().lock().unwrap().present_count, 1);
    // the clock lights pixels even with an otherwise empty board
    assert!(driver.lit_pixels() > 0);
}

#[test]
fn test_scenario_suspend_with_missing_departure() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "operation.json",
        r#"{"suspend": [{"name": "Main Line", "detail": "accident"}]}"#,
    );

    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();

    let texts: Vec<&str> = board.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "本日は 08月30日（日）です",
            "【運転見合わせ】 Main Line: accident",
            "エラーが発生しています。情報が取得できていません",
        ]
    );
    assert_eq!(board.messages[1].color, Color::Red);
    assert_eq!(board.messages[2].color, Color::Red);
    assert!(!board.messages.iter().any(|m| m.text == "平常運転"));
}

#[test]
fn test_scenario_all_documents_absent() {
    let dir = tempfile::tempdir().unwrap();
    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();

    assert_eq!(board.messages.len(), 2);
    assert_eq!(
        board.messages[1].text,
        "エラーが発生しています。情報が取得できていません"
    );
    // the date message keeps the list non-empty, so the all-clear tail
    // never fires
    assert!(!board.messages.iter().any(|m| m.text == "平常運転"));
}

#[test]
fn test_reload_gate_and_ticker_continuity() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "operation.json", r#"{"delay": []}"#);

    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();
    let offset_after_one = board.ticker.offset();
    assert_eq!(offset_after_one, W as i32 - 1);

    // a second reload-worthy tick arrives; the file has changed meanwhile
    write_json(
        dir.path(),
        "operation.json",
        r#"{"delay": [{"name": "中央線", "detail": "混雑"}]}"#,
    );
    // inside the gate: no reload yet
    board
        .step(&mut frame, &font, t0 + Duration::from_millis(500), at(12, 0, 1))
        .unwrap();
    assert_eq!(board.messages.len(), 2); // date + departure error only

    // gate opens: list rebuilt, scroll position untouched
    board
        .step(&mut frame, &font, t0 + Duration::from_secs(2), at(12, 0, 3))
        .unwrap();
    assert!(board.messages.iter().any(|m| m.text == "【遅延】 中央線: 混雑"));
    assert_eq!(board.ticker.offset(), W as i32 - 3);
}

#[test]
fn test_face_flips_once_per_period() {
    let dir = tempfile::tempdir().unwrap();
    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();
    assert_eq!(board.faces.face(), Face::A);

    board
        .step(&mut frame, &font, t0 + Duration::from_secs(4), at(12, 0, 5))
        .unwrap();
    assert_eq!(board.faces.face(), Face::A);

    // a 13-second stall spans two periods but produces exactly one flip
    board
        .step(&mut frame, &font, t0 + Duration::from_secs(13), at(12, 0, 14))
        .unwrap();
    assert_eq!(board.faces.face(), Face::B);
}

#[test]
fn test_ticker_scrolls_across_frames() {
    let dir = tempfile::tempdir().unwrap();
    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);
    let mut driver = MockDriver::new(W, H);

    board.step(&mut frame, &font, t0, at(12, 0, 1)).unwrap();
    // replace the composed list with a long run of block digits so the
    // scroll is visible to pixel assertions
    board.messages = vec![ScrollMessage { text: "0".repeat(30), color: Color::Cyan }];

    for i in 0..40u64 {
        board
            .step(&mut frame, &font, t0 + Duration::from_millis(20 * i), at(12, 0, 1))
            .unwrap();
        driver.present(&frame).unwrap();
    }

    // after ~40 frames the head of the message is inside the viewport
    let offset = board.ticker.offset();
    assert!(offset < W as i32 - 30, "offset {offset}");
    assert_eq!(driver.pixel_at(offset as u32 + 1, 28), Some(Color::Cyan.rgb()));

    // the clock's private clear keeps its band free of ticker pixels
    for y in 22..=31 {
        for x in (W - 29)..W {
            assert_ne!(driver.pixel_at(x, y), Some(Color::Cyan.rgb()));
        }
    }
}

#[test]
fn test_departure_rows_differ_between_faces() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "departure.json",
        r#"{"東京": {"departure_time": "13:00", "status": "",
             "segments": [{"type": "快速", "destination": "東京"}]}}"#,
    );

    let font = test_font();
    let t0 = Instant::now();
    let mut board = BoardState::new(dir.path(), W as i32, t0);
    let mut frame = FrameBuffer::new(W, H);

    // face A at 12:15: "45分後" countdown in green at x 45
    board.step(&mut frame, &font, t0, at(12, 15, 1)).unwrap();
    assert_eq!(board.faces.face(), Face::A);
    assert_eq!(frame.pixel_at(46, 5), Some(Color::Green.rgb()));

    // face B after a flip: scheduled "13:00" in green at x 50,
    // nothing at the face-A countdown slot to its left
    board
        .step(&mut frame, &font, t0 + Duration::from_secs(5), at(12, 15, 6))
        .unwrap();
    assert_eq!(board.faces.face(), Face::B);
    assert_eq!(frame.pixel_at(50, 5), Some(Color::Green.rgb()));
    assert_eq!(frame.pixel_at(46, 5), Some(Color::Black.rgb()));
}
