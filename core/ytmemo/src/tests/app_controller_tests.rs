//! AppController のシナリオテスト（メモリ上のストア + ヘッドレスプレイヤー）

use common::ports::outbound::Clock;
use std::sync::atomic::Ordering;
use tempfile::tempdir;

use super::fakes::{memory_store, FakeClipboard, Harness, FEEDBACK_MS};
use crate::domain::{Confirmation, Page, Theme, TextField, VideoId};
use crate::usecase::Flow;

const VIDEO_A: &str = "AAAAAAAAAAA";
const VIDEO_B: &str = "BBBBBBBBBBB";

fn load(h: &mut Harness, id: &str) {
    h.send(&format!("load https://www.youtube.com/watch?v={}", id));
}

fn first_memo_id(h: &Harness) -> String {
    h.controller.state().memos.rows()[0].memo.id.to_string()
}

#[test]
fn test_ready_video_is_recorded_and_controls_enabled() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);

    let state = h.controller.state();
    assert_eq!(state.current_video, Some(VideoId::new(VIDEO_A)));
    assert_eq!(state.current_title.as_deref(), Some("YouTube video AAAAAAAAAAA"));
    assert!(state.controls.add_memo);
    assert!(state.controls.frame_step);

    let history = h.store.load_history().unwrap();
    assert_eq!(history.len(), 1);
    let entry = history.find(&VideoId::new(VIDEO_A)).unwrap();
    assert_eq!(entry.title, "YouTube video AAAAAAAAAAA");
    assert_eq!(entry.last_played.timestamp_millis(), super::fakes::START_MS as i64);
}

#[test]
fn test_memos_are_kept_in_time_order_and_persisted() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);

    h.clock.advance(10_000);
    h.send("input later");
    h.send("add");
    // 5 秒戻して前の位置にメモ
    h.send("key ctrl+a");
    h.send("input   earlier  ");
    h.send("add");

    assert_eq!(h.memo_texts(), vec!["earlier", "later"]);
    assert_eq!(h.controller.state().quick_memo, "");
    let times: Vec<f64> = h
        .controller
        .state()
        .memos
        .rows()
        .iter()
        .map(|r| r.memo.time)
        .collect();
    assert_eq!(times, vec![5.0, 10.0]);

    let history = h.store.load_history().unwrap();
    let stored: Vec<&str> = history
        .find(&VideoId::new(VIDEO_A))
        .unwrap()
        .memos
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(stored, vec!["earlier", "later"]);
}

#[test]
fn test_memo_text_is_escaped_in_view_but_stored_raw() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.send("input <b>bold</b>");
    h.send("add");
    h.take_output();

    h.send("show");
    let out = h.take_output();
    assert!(out.contains("&lt;b&gt;bold&lt;/b&gt;"), "{}", out);
    assert!(!out.contains("<b>"));
    assert_eq!(h.memo_texts(), vec!["<b>bold</b>"]);
}

#[test]
fn test_add_without_video_alerts() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    h.send("input note");
    h.send("add");
    assert_eq!(h.dialog.alerts(), vec!["No video is loaded.".to_string()]);
    assert!(h.memo_texts().is_empty());
    assert_eq!(h.controller.state().quick_memo, "note");
}

#[test]
fn test_invalid_url_only_alerts() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    h.send("load https://example.com/watch?v=nothing");
    assert_eq!(
        h.dialog.alerts(),
        vec!["This is not a valid YouTube video URL.".to_string()]
    );
    assert_eq!(h.controller.state().current_video, None);
    assert!(h.store.load_history().unwrap().is_empty());
}

#[test]
fn test_paste_loads_clipboard_url() {
    let dir = tempdir().unwrap();
    let mut h = Harness::with(
        memory_store(),
        FakeClipboard::with_text("  https://youtu.be/CCCCCCCCCCC \n"),
        dir.path(),
    );
    h.send("paste");
    assert_eq!(
        h.controller.state().current_video,
        Some(VideoId::new("CCCCCCCCCCC"))
    );
}

#[test]
fn test_paste_failure_alerts() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    h.send("paste");
    let alerts = h.dialog.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Failed to paste from the clipboard."));
}

#[test]
fn test_shortcuts_ignored_while_text_field_focused() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);

    h.send("focus memo");
    h.send("input note");
    h.send("key m");
    h.send("key up");
    assert!(h.memo_texts().is_empty());
    assert_eq!(h.controller.state().feedback.visible_text(h.clock.now_ms()), None);

    h.send("focus none");
    h.send("key m");
    assert_eq!(h.memo_texts(), vec!["note"]);
}

#[test]
fn test_rate_and_decile_feedback() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);

    h.send("key up");
    let now = h.clock.now_ms();
    assert_eq!(h.controller.state().feedback.visible_text(now), Some("1.25x"));
    h.send("key s");
    h.send("key s");
    assert_eq!(h.controller.state().feedback.visible_text(now), Some("0.75x"));
    assert_eq!(
        h.controller.state().feedback.visible_text(now + FEEDBACK_MS),
        None
    );

    h.send("key Digit3");
    assert_eq!(h.controller.state().feedback.visible_text(now), Some("30%"));
    h.take_output();
    h.send("show");
    let out = h.take_output();
    assert!(out.contains("00:00:30"), "{}", out);
    assert!(out.contains("0.75x"), "{}", out);
}

#[test]
fn test_frame_step_requires_ready_video() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    h.send("next");
    assert!(h.take_output().contains("Frame controls are disabled"));

    load(&mut h, VIDEO_A);
    h.send("frame 3");
    h.send("show");
    let out = h.take_output();
    assert!(out.contains("paused"), "{}", out);
    assert!(!out.contains("disabled"));
}

#[test]
fn test_switching_videos_keeps_memos_per_video() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.clock.advance(1_000);
    h.send("input a1");
    h.send("add");

    h.send(&format!("load https://youtu.be/{}", VIDEO_B));
    assert!(h.memo_texts().is_empty());
    h.clock.advance(1_000);
    h.send("input b1");
    h.send("add");

    h.send(&format!("open {}", VIDEO_A));
    assert_eq!(h.memo_texts(), vec!["a1"]);
    assert_eq!(h.controller.state().router.page(), Page::Video);

    let history = h.store.load_history().unwrap();
    let order: Vec<&str> = history.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec![VIDEO_A, VIDEO_B]);
    assert_eq!(history.find(&VideoId::new(VIDEO_B)).unwrap().memos[0].text, "b1");
}

#[test]
fn test_edit_trims_and_leaves_edit_focus() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.send("input draft");
    h.send("add");
    let id = first_memo_id(&h);

    h.send(&format!("edit {}", id));
    assert_eq!(h.controller.state().focus, Some(TextField::MemoEdit));
    h.send("save   final text  ");
    assert_eq!(h.memo_texts(), vec!["final text"]);
    assert_eq!(h.controller.state().focus, None);
    assert!(h.controller.state().memos.editing().is_none());
}

#[test]
fn test_delete_memo_asks_and_refusal_changes_nothing() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.send("input keep me");
    h.send("add");
    let id = first_memo_id(&h);

    h.dialog.answer(false);
    h.send(&format!("delete {}", id));
    assert_eq!(h.memo_texts(), vec!["keep me"]);
    assert_eq!(h.dialog.questions(), vec![Confirmation::DeleteMemo]);

    h.send(&format!("edit {}", id));
    h.dialog.answer(true);
    h.send(&format!("delete {}", id));
    assert!(h.memo_texts().is_empty());
    assert!(h.controller.state().memos.editing().is_none());
    assert_eq!(h.controller.state().focus, None);
    let history = h.store.load_history().unwrap();
    assert!(history.find(&VideoId::new(VIDEO_A)).unwrap().memos.is_empty());

    // 削除済みのメモは編集できない
    h.take_output();
    h.send(&format!("edit {}", id));
    assert!(h.take_output().contains("No memo with id"));
}

#[test]
fn test_history_page_search_and_delete() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.take_output();

    h.send("page history");
    assert!(h.take_output().contains("YouTube video AAAAAAAAAAA"));
    h.send("search zzz");
    assert!(h.take_output().contains("No viewing history."));
    h.send("search");

    h.dialog.answer(true);
    h.send(&format!("forget {}", VIDEO_A));
    assert_eq!(
        h.dialog.questions(),
        vec![Confirmation::DeleteHistoryEntry {
            title: Some("YouTube video AAAAAAAAAAA".to_string())
        }]
    );
    assert!(h.store.load_history().unwrap().is_empty());
    assert!(h.take_output().contains("No viewing history."));
}

#[test]
fn test_preferences_are_persisted() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    h.send("theme dark");
    h.send("sidebar");
    assert_eq!(h.store.load_theme().unwrap(), Theme::Dark);
    assert!(h.store.load_sidebar_collapsed().unwrap());
    h.send("sidebar");
    assert!(!h.store.load_sidebar_collapsed().unwrap());
}

#[test]
fn test_import_reloads_state_and_keeps_page() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.send("input saved");
    h.send("add");
    h.send("export");
    let exported = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();

    h.send(&format!("load https://youtu.be/{}", VIDEO_B));
    h.send("page settings");
    h.send("section data");
    h.dialog.answer(true);
    h.send(&format!("import {}", exported.display()));

    let state = h.controller.state();
    assert_eq!(state.router.page(), Page::Settings);
    assert_eq!(state.router.location(), "#settings");
    assert_eq!(state.current_video, None);
    assert_eq!(state.history.len(), 1);
    assert!(h
        .dialog
        .alerts()
        .contains(&"Data was imported successfully. Reloading.".to_string()));
}

#[test]
fn test_quit_flushes_and_stops() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    assert_eq!(h.send("show"), Flow::Continue);
    assert_eq!(h.send("quit"), Flow::Quit);
}

#[test]
fn test_import_discards_player_until_next_load() {
    let dir = tempdir().unwrap();
    let mut h = Harness::new(dir.path());
    load(&mut h, VIDEO_A);
    h.send("input saved");
    h.send("add");
    h.send("export");
    let exported = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    h.dialog.answer(true);
    h.send(&format!("import {}", exported.display()));

    // 再読み込み後は動画が無いので追加できない
    h.send("input after import");
    h.send("add");
    assert_eq!(h.dialog.alerts().last().map(String::as_str), Some("No video is loaded."));
    assert!(h.memo_texts().is_empty());
    h.send("key Space");
    assert_eq!(h.controller.state().current_video, None);
    assert!(!h.controller.state().controls.add_memo);

    load(&mut h, VIDEO_A);
    assert_eq!(h.memo_texts(), vec!["saved"]);
    h.send("add");
    h.send("key Space");
    let history = h.store.load_history().unwrap();
    let stored: Vec<&str> = history
        .find(&VideoId::new(VIDEO_A))
        .unwrap()
        .memos
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(stored, vec!["saved", "after import"]);
}

#[test]
fn test_add_memo_waits_for_ready_report() {
    let dir = tempdir().unwrap();
    let (mut h, released) = Harness::with_delayed_player(dir.path());
    load(&mut h, VIDEO_A);
    assert!(!h.controller.state().controls.add_memo);
    assert!(!h.controller.state().controls.frame_step);

    h.send("input early");
    h.take_output();
    h.send("add");
    h.send("key m");
    assert!(h.take_output().contains("Add memo is disabled"));
    assert!(h.memo_texts().is_empty());
    assert!(h.dialog.alerts().is_empty());
    assert_eq!(h.controller.state().quick_memo, "early");

    released.store(true, Ordering::SeqCst);
    h.send("show");
    assert!(h.controller.state().controls.add_memo);
    h.send("add");
    assert_eq!(h.memo_texts(), vec!["early"]);
    let history = h.store.load_history().unwrap();
    assert_eq!(history.find(&VideoId::new(VIDEO_A)).unwrap().memos.len(), 1);
}
