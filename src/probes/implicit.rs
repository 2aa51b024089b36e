// 具象型の公開メソッドとしても呼び出せる能力実装

use super::busy_loop::busy_loop;
use crate::core::Capability;

/// 暗黙的実装プローブ
///
/// `run` は型自身の公開メソッドであり、トレイト実装はそれに委譲する
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitProbe;

impl ImplicitProbe {
    /// 具象型から直接呼び出せるビジーループ
    #[inline(never)]
    pub fn run(&self) -> i32 {
        busy_loop()
    }
}

impl Capability for ImplicitProbe {
    fn run(&self) -> i32 {
        ImplicitProbe::run(self)
    }
}
