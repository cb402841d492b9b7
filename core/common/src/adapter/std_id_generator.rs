//! IdGenerator の標準実装（Clock のミリ秒 + 単調増加補正）
//!
//! 値は作成時刻（ms）そのもの。同一ミリ秒内や時計の巻き戻りでは直前の値 + 1 を返す。

use crate::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Clock + 直前値で一意な ID を生成する標準実装
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicI64,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicI64::new(0),
        }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> i64 {
        let now = self.clock.now_ms() as i64;
        loop {
            let prev = self.last.load(Ordering::SeqCst);
            let next = if now > prev { now } else { prev + 1 };
            if self
                .last
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}
