//! パフォーマンス測定とベンチマークモジュール
//!
//! ディスパッチ経路ごとの簡易比較とレポート出力を提供

pub mod config;
pub mod observer;
pub mod performance_comparison;

pub use config::ComparisonConfig;
pub use observer::{ComparisonObserver, ConsoleObserver, NoOpObserver};
pub use performance_comparison::{CaseMeasurement, ComparisonReport, PerformanceComparison};
