//! メモのドメイン型と、現在の動画のメモ一覧（行ごとの表示/編集状態つき）

use serde::{Deserialize, Serialize};

/// メモ ID（作成時刻のミリ秒。動画内で一意）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoId(i64);

impl MemoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for MemoId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// 再生位置に紐づいたメモ（永続化形式: `{id, time, text}`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    /// 動画先頭からの秒数
    pub time: f64,
    pub text: String,
}

/// 行の状態。編集中の行は入力途中のテキストを持つ。
#[derive(Debug, Clone, PartialEq)]
pub enum RowMode {
    Viewing,
    Editing { draft: String },
}

/// メモ一覧の 1 行
#[derive(Debug, Clone, PartialEq)]
pub struct MemoRow {
    pub memo: Memo,
    pub mode: RowMode,
}

impl MemoRow {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }
}

/// 現在の動画のメモ一覧
///
/// 不変条件:
/// - 行は time の昇順（同じ time は挿入順）
/// - Editing の行は高々 1 つ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoBoard {
    rows: Vec<MemoRow>,
}

impl MemoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みのメモから一覧を作る（すべて Viewing）
    pub fn from_memos(memos: Vec<Memo>) -> Self {
        let mut rows: Vec<MemoRow> = memos
            .into_iter()
            .map(|memo| MemoRow {
                memo,
                mode: RowMode::Viewing,
            })
            .collect();
        sort_rows(&mut rows);
        Self { rows }
    }

    pub fn rows(&self) -> &[MemoRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: MemoId) -> Option<&Memo> {
        self.rows.iter().find(|r| r.memo.id == id).map(|r| &r.memo)
    }

    /// 永続化用のスナップショット（表示状態は含まない）
    pub fn to_memos(&self) -> Vec<Memo> {
        self.rows.iter().map(|r| r.memo.clone()).collect()
    }

    /// 追加して time で安定ソートする
    pub fn insert(&mut self, memo: Memo) {
        self.rows.push(MemoRow {
            memo,
            mode: RowMode::Viewing,
        });
        sort_rows(&mut self.rows);
    }

    /// テキストを上書きし編集モードを抜ける。ID が無ければ何もしない。
    ///
    /// time は変わらないので並び替えはしない。
    pub fn set_text(&mut self, id: MemoId, text: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.memo.id == id) else {
            return false;
        };
        row.memo.text = text.to_string();
        self.cancel_edit();
        true
    }

    /// 行を削除する。編集中の行だった場合は編集状態も消える。
    pub fn remove(&mut self, id: MemoId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.memo.id != id);
        self.rows.len() != before
    }

    /// 指定行を編集モードにする（他の行は Viewing に戻る）
    pub fn enter_edit(&mut self, id: MemoId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for row in &mut self.rows {
            row.mode = if row.memo.id == id {
                match &row.mode {
                    RowMode::Editing { draft } => RowMode::Editing {
                        draft: draft.clone(),
                    },
                    RowMode::Viewing => RowMode::Editing {
                        draft: row.memo.text.clone(),
                    },
                }
            } else {
                RowMode::Viewing
            };
        }
        true
    }

    pub fn cancel_edit(&mut self) {
        for row in &mut self.rows {
            row.mode = RowMode::Viewing;
        }
    }

    /// 編集中の行の下書きを差し替える。編集中の行が無ければ false。
    pub fn set_draft(&mut self, text: &str) -> bool {
        match self.rows.iter_mut().find(|r| r.is_editing()) {
            Some(row) => {
                row.mode = RowMode::Editing {
                    draft: text.to_string(),
                };
                true
            }
            None => false,
        }
    }

    /// 編集中の行（ID と下書き）
    pub fn editing(&self) -> Option<(MemoId, &str)> {
        self.rows.iter().find_map(|r| match &r.mode {
            RowMode::Editing { draft } => Some((r.memo.id, draft.as_str())),
            RowMode::Viewing => None,
        })
    }
}

fn sort_rows(rows: &mut [MemoRow]) {
    // sort_by は安定ソート
    rows.sort_by(|a, b| a.memo.time.total_cmp(&b.memo.time));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(id: i64, time: f64, text: &str) -> Memo {
        Memo {
            id: MemoId::new(id),
            time,
            text: text.to_string(),
        }
    }

    fn times(board: &MemoBoard) -> Vec<f64> {
        board.rows().iter().map(|r| r.memo.time).collect()
    }

    #[test]
    fn test_sorted_after_every_insert() {
        let mut board = MemoBoard::new();
        for (i, t) in [5.0, 1.5, 9.25, 0.0, 3.0, 3.0].into_iter().enumerate() {
            board.insert(memo(i as i64, t, ""));
            let ts = times(&board);
            assert!(ts.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", ts);
        }
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = MemoBoard::new();
        board.insert(memo(1, 2.0, "first"));
        board.insert(memo(2, 1.0, "earlier"));
        board.insert(memo(3, 2.0, "second"));
        let texts: Vec<&str> = board.rows().iter().map(|r| r.memo.text.as_str()).collect();
        assert_eq!(texts, vec!["earlier", "first", "second"]);
    }

    #[test]
    fn test_only_one_row_in_edit_mode() {
        let mut board = MemoBoard::from_memos(vec![memo(1, 1.0, "a"), memo(2, 2.0, "b")]);
        assert!(board.enter_edit(MemoId::new(1)));
        assert!(board.enter_edit(MemoId::new(2)));
        let editing: Vec<_> = board.rows().iter().filter(|r| r.is_editing()).collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(board.editing(), Some((MemoId::new(2), "b")));
    }

    #[test]
    fn test_reentering_same_row_keeps_draft() {
        let mut board = MemoBoard::from_memos(vec![memo(1, 1.0, "a")]);
        board.enter_edit(MemoId::new(1));
        board.set_draft("typing");
        board.enter_edit(MemoId::new(1));
        assert_eq!(board.editing(), Some((MemoId::new(1), "typing")));
    }

    #[test]
    fn test_set_text_exits_edit_mode() {
        let mut board = MemoBoard::from_memos(vec![memo(1, 1.0, "a")]);
        board.enter_edit(MemoId::new(1));
        assert!(board.set_text(MemoId::new(1), "changed"));
        assert_eq!(board.editing(), None);
        assert_eq!(board.get(MemoId::new(1)).unwrap().text, "changed");
    }

    #[test]
    fn test_remove_then_set_text_is_noop() {
        let mut board = MemoBoard::from_memos(vec![memo(1, 1.0, "a"), memo(2, 2.0, "b")]);
        assert!(board.remove(MemoId::new(1)));
        let snapshot = board.clone();
        assert!(!board.set_text(MemoId::new(1), "ghost"));
        assert_eq!(board, snapshot);
        assert!(!board.remove(MemoId::new(1)));
    }

    #[test]
    fn test_remove_other_row_keeps_edit_mode() {
        let mut board = MemoBoard::from_memos(vec![memo(1, 1.0, "a"), memo(2, 2.0, "b")]);
        board.enter_edit(MemoId::new(2));
        board.remove(MemoId::new(1));
        assert_eq!(board.editing(), Some((MemoId::new(2), "b")));
        board.remove(MemoId::new(2));
        assert_eq!(board.editing(), None);
    }

    #[test]
    fn test_from_memos_sorts_unsorted_input() {
        let board = MemoBoard::from_memos(vec![memo(1, 9.0, "late"), memo(2, 1.0, "early")]);
        assert_eq!(times(&board), vec![1.0, 9.0]);
    }

    #[test]
    fn test_memo_json_shape() {
        let json = serde_json::to_value(memo(1700000000000, 12.5, "hit confirm")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1700000000000i64, "time": 12.5, "text": "hit confirm"})
        );
    }
}
