//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 永続化・ダイアログ・クリップボード・プレイヤーの trait（common の FileSystem / Clock / Log 等も利用）

pub mod inbound;
pub mod outbound;
