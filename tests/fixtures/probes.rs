// テスト用の追加プローブ

use dispatch_bench::probes::count_to;
use dispatch_bench::Capability;

/// 上限の異なるループを持つプローブ
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortLoopProbe;

impl Capability for ShortLoopProbe {
    fn run(&self) -> i32 {
        count_to(42)
    }
}
