//! JSONL ファイルへ追記する Log 実装と、何もしない NoopLog

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// 1 レコードを 1 行の JSON として追記する。親ディレクトリは書き込みのたびに用意する。
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            self.fs.create_dir_all(dir)?;
        }
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        // 1 レコード = 1 回の write_all
        let mut file = self.fs.open_append(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// ログパスを解決できなかったとき・テスト用
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
