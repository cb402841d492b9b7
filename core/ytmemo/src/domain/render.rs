//! メモ一覧・履歴一覧の描画（HTML 断片とテキスト表示）
//!
//! メモ本文とタイトルは必ず `escape_markup` を通してから埋め込む。

use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

use super::history::HistoryEntry;
use super::memo::{MemoRow, RowMode};
use super::time::format_time;

/// 履歴が空（または検索で 0 件）のときの表示
pub const NO_HISTORY: &str = "No viewing history.";

/// `<` と `>` を実体参照にする
pub fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// 属性値用（`"` と `&` も含めて実体参照にする）
fn escape_attr(text: &str) -> String {
    escape_markup(&text.replace('&', "&amp;")).replace('"', "&quot;")
}

fn local_time(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S").to_string()
}

/// メモ一覧の `<li>` 群
pub fn memo_list_html(rows: &[MemoRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let memo = &row.memo;
        let stamp = format!(
            r#"<h3 class="timestamp" data-time="{}">{}</h3>"#,
            memo.time,
            format_time(memo.time)
        );
        let _ = write!(out, r#"<li class="memo-item" data-id="{}">"#, memo.id);
        match &row.mode {
            RowMode::Viewing => {
                let _ = write!(
                    out,
                    concat!(
                        r#"<div class="memo-header">{}"#,
                        r#"<div class="memo-item-actions">"#,
                        r#"<button class="memo-item-edit-btn" title="Edit memo">Edit</button>"#,
                        r#"<button class="delete-button memo-item-delete-btn" title="Delete memo">Delete</button>"#,
                        r#"</div></div>"#,
                        r#"<div class="memo-content"><p>{}</p></div>"#
                    ),
                    stamp,
                    escape_markup(&memo.text)
                );
            }
            RowMode::Editing { draft } => {
                let _ = write!(
                    out,
                    concat!(
                        r#"<div class="memo-header">{}<hr></div>"#,
                        r#"<div><textarea class="memo-edit-textarea">{}</textarea>"#,
                        r#"<div class="memo-edit-buttons">"#,
                        r#"<button class="cancel-button">Cancel</button>"#,
                        r#"<button class="save-button">Save</button>"#,
                        r#"</div></div>"#
                    ),
                    stamp,
                    escape_markup(draft)
                );
            }
        }
        out.push_str("</li>");
    }
    out
}

/// 履歴一覧の `<li>` 群（空なら「履歴なし」の 1 行）
pub fn history_list_html(entries: &[&HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!(r#"<li class="no-history">{}</li>"#, NO_HISTORY);
    }
    let mut out = String::new();
    for e in entries {
        let id = escape_attr(&e.id);
        let _ = write!(
            out,
            concat!(
                "<li>",
                r##"<div class="history-col-title"><a href="#video" data-video-id="{}">{}</a></div>"##,
                r#"<div class="history-col-memos">{}</div>"#,
                r#"<div class="history-col-date">{}</div>"#,
                r#"<div class="history-col-actions"><button class="history-delete-btn" data-video-id="{}">Delete</button></div>"#,
                "</li>"
            ),
            id,
            escape_markup(&e.title),
            e.memos.len(),
            local_time(&e.last_played),
            id
        );
    }
    out
}

/// 端末表示用のメモ一覧
pub fn memo_list_text(rows: &[MemoRow]) -> String {
    if rows.is_empty() {
        return "(no memos)\n".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let memo = &row.memo;
        match &row.mode {
            RowMode::Viewing => {
                let _ = writeln!(
                    out,
                    "{} [{}] {}",
                    format_time(memo.time),
                    memo.id,
                    escape_markup(&memo.text)
                );
            }
            RowMode::Editing { draft } => {
                let _ = writeln!(
                    out,
                    "{} [{}] (editing) {}",
                    format_time(memo.time),
                    memo.id,
                    escape_markup(draft)
                );
            }
        }
    }
    out
}

/// 端末表示用の履歴一覧
pub fn history_list_text(entries: &[&HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_HISTORY);
    }
    let mut out = format!("{:11}  {:>5}  {:19}  {}\n", "ID", "MEMOS", "LAST PLAYED", "TITLE");
    for e in entries {
        let title = escape_markup(&e.title);
        let title = if title.chars().count() > 50 {
            format!("{}...", title.chars().take(47).collect::<String>())
        } else {
            title
        };
        let _ = writeln!(
            out,
            "{:11}  {:>5}  {:19}  {}",
            e.id.as_str(),
            e.memos.len(),
            local_time(&e.last_played),
            title
        );
    }
    out
}
