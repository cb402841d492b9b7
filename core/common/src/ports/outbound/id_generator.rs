//! ID 生成 Outbound ポート
//!
//! usecase は IdGenerator を注入し、テストでは連番を返す実装を渡せる。

/// 作成時刻（ミリ秒）ベースの一意な整数 ID を生成する抽象
///
/// 同一ミリ秒内に複数回呼ばれても値は重複せず、単調増加する。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}
