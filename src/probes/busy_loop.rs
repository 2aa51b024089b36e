//! 全ての呼び出し経路が共有する固定回数ループ

use crate::core::LOOP_LIMIT;
use std::hint::black_box;

/// `0` から `limit` まで数え、最終カウンタ値を返す
///
/// 条件は `i < limit`、後置インクリメント。負の上限では一度も回らず `0` を返す。
/// カウンタは `black_box` を通し、ループ全体が定数に畳み込まれないようにする。
#[inline(never)]
pub fn count_to(limit: i32) -> i32 {
    let mut i = 0;
    while black_box(i) < limit {
        i += 1;
    }
    i
}

/// 能力実装の本体。常に [`LOOP_LIMIT`] を返す
#[inline(always)]
pub fn busy_loop() -> i32 {
    count_to(black_box(LOOP_LIMIT))
}
