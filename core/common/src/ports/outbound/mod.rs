//! Outbound ポート: アプリが外界（FS・時刻・環境変数・キー・バリューストア・ログ）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod id_generator;
pub mod key_value_store;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use id_generator::IdGenerator;
pub use key_value_store::KeyValueStore;
pub use log::{Log, LogLevel, LogRecord};
