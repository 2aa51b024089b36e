// テストユーティリティ
// 統合テストで共有するプローブとヘルパー

#![allow(dead_code)]

pub mod probes;

pub use probes::*;

use dispatch_bench::DispatchBenchmarkSuite;

/// 既定レジストリからスイートを構築
pub fn build_suite() -> DispatchBenchmarkSuite {
    DispatchBenchmarkSuite::new().expect("default registry must build the suite")
}
