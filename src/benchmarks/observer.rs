// 簡易比較の進捗通知

use super::performance_comparison::CaseMeasurement;
use crate::suite::BenchmarkCase;

/// 比較実行の進捗を受け取るトレイト
#[cfg_attr(test, mockall::automock)]
pub trait ComparisonObserver {
    /// 実行開始時に呼ばれる
    fn report_started(&self, case_count: usize, iterations: u64);

    /// 1ケースの測定完了ごとに呼ばれる
    fn report_case(&self, case: BenchmarkCase, measurement: &CaseMeasurement);

    /// 全ケース完了時に呼ばれる
    fn report_completed(&self, case_count: usize);
}

/// コンソール出力による進捗通知
#[derive(Debug, Default, Clone)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ComparisonObserver for ConsoleObserver {
    fn report_started(&self, case_count: usize, iterations: u64) {
        println!("🔬 ディスパッチ経路比較 ({case_count} cases, {iterations} iterations)");
    }

    fn report_case(&self, case: BenchmarkCase, measurement: &CaseMeasurement) {
        let marker = if case.is_baseline() { "🟢" } else { "🔹" };
        println!(
            "  {marker} {:<46} {:>10.2} ns/call",
            case.description(),
            measurement.nanos_per_call
        );
    }

    fn report_completed(&self, case_count: usize) {
        println!("✅ {case_count} ケースの測定が完了しました");
    }
}

/// 何もしない進捗通知（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpObserver;

impl NoOpObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ComparisonObserver for NoOpObserver {
    fn report_started(&self, _case_count: usize, _iterations: u64) {}

    fn report_case(&self, _case: BenchmarkCase, _measurement: &CaseMeasurement) {}

    fn report_completed(&self, _case_count: usize) {}
}
