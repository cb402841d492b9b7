//! ytmemo 共通ライブラリ
//!
//! エラー型・Outbound ポート・標準アダプタを提供します。
//! アプリ固有のドメインは持たない。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype / 解決済みディレクトリ）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装（Std* / File* / Memory*）
pub mod adapter;
