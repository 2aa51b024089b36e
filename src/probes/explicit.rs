// トレイト経由でのみ到達できる能力実装

use super::busy_loop::busy_loop;
use crate::core::Capability;

/// 明示的実装プローブ
///
/// 固有メソッドとしての `run` を持たないため、呼び出しは必ず
/// `Capability` を経由する。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitProbe;

impl Capability for ExplicitProbe {
    #[inline(never)]
    fn run(&self) -> i32 {
        busy_loop()
    }
}
