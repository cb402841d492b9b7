//! アダプター（外界の I/O を trait で抽象化した Outbound ポートの実装）
//!
//! usecase はポートの trait 経由でのみファイル・時刻・環境変数・ストアに触れる。
//! 実装は標準実装（Std* / File*）やテスト用の実装（Memory* / Manual* / Noop*）を注入する。

pub mod file_json_log;
pub mod file_key_value_store;
pub mod memory_key_value_store;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_id_generator;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use std_clock::{ManualClock, StdClock};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_id_generator::StdIdGenerator;
