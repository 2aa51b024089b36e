// 能力トレイトを経由するジェネリックランナー

use crate::core::{Capability, ValueCapability};
use std::hint::black_box;

/// レジストリに登録される汎用ランナーの名前
pub const GENERIC_RUNNER_NAME: &str = "generic_runner";

/// ゼロ値の `T` を構築し、`Capability` 制約を通して `run` を呼ぶ
///
/// `T` が静的に確定していても、呼び出しは常にトレイトメソッドに解決される。
#[inline(never)]
pub(crate) fn generic_runner<T: ValueCapability>() -> i32 {
    let value = black_box(T::default());
    Capability::run(&value)
}
