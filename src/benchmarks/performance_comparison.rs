//! ディスパッチ経路の簡易パフォーマンス比較
//!
//! `Instant` による単純な計測でケース間の相対的な差を確認する。
//! ウォームアップや外れ値除去などの統計処理は criterion のベンチマーク
//! （`benches/dispatch_matrix.rs`）に任せる。

use super::config::ComparisonConfig;
use super::observer::ComparisonObserver;
use crate::core::{DispatchError, DispatchMechanism, DispatchResult, ProbeVariant, LOOP_LIMIT};
use crate::suite::{BenchmarkCase, DispatchBenchmarkSuite};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// 1ケースの測定結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseMeasurement {
    pub case: BenchmarkCase,
    pub description: String,
    pub mechanism: DispatchMechanism,
    pub variant: ProbeVariant,
    pub baseline: bool,
    pub iterations: u64,
    pub total_time: Duration,
    pub nanos_per_call: f64,
    pub ratio_to_baseline: Option<f64>,
    pub result: i32,
}

impl CaseMeasurement {
    fn new(case: BenchmarkCase, iterations: u64, total_time: Duration, result: i32) -> Self {
        let nanos_per_call = if iterations > 0 {
            total_time.as_nanos() as f64 / iterations as f64
        } else {
            0.0
        };

        Self {
            case,
            description: case.description().to_string(),
            mechanism: case.mechanism(),
            variant: case.variant(),
            baseline: case.is_baseline(),
            iterations,
            total_time,
            nanos_per_call,
            ratio_to_baseline: None,
            result,
        }
    }
}

/// 比較全体のレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: String,
    pub iterations: u64,
    pub measurements: Vec<CaseMeasurement>,
    pub fastest: Option<BenchmarkCase>,
}

impl ComparisonReport {
    fn new(iterations: u64, mut measurements: Vec<CaseMeasurement>) -> Self {
        let baseline_nanos = measurements
            .iter()
            .find(|m| m.baseline)
            .map(|m| m.nanos_per_call)
            .filter(|nanos| *nanos > 0.0);

        if let Some(baseline_nanos) = baseline_nanos {
            for measurement in &mut measurements {
                measurement.ratio_to_baseline = Some(measurement.nanos_per_call / baseline_nanos);
            }
        }

        let fastest = measurements
            .iter()
            .min_by(|a, b| a.nanos_per_call.total_cmp(&b.nanos_per_call))
            .map(|m| m.case);

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            iterations,
            measurements,
            fastest,
        }
    }

    /// 指定ケースの測定結果
    pub fn measurement(&self, case: BenchmarkCase) -> Option<&CaseMeasurement> {
        self.measurements.iter().find(|m| m.case == case)
    }

    /// JSON形式でのレポート出力
    ///
    /// `force` が偽のとき既存ファイルは上書きしない
    pub fn export_json(&self, path: &Path, force: bool) -> DispatchResult<()> {
        if path.exists() && !force {
            return Err(DispatchError::report(anyhow::anyhow!(
                "出力ファイルが既に存在します: {}",
                path.display()
            )));
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        info!(path = %path.display(), "レポートを出力しました");
        Ok(())
    }
}

/// `call` を `iterations` 回実行して経過時間を測る
///
/// [`LOOP_LIMIT`] 以外の戻り値があれば最初のものを返す
fn time_calls(iterations: u64, mut call: impl FnMut() -> i32) -> (Duration, Option<i32>) {
    let mut mismatch = None;

    let start = Instant::now();
    for _ in 0..iterations {
        let result = black_box(call());
        if result != LOOP_LIMIT && mismatch.is_none() {
            mismatch = Some(result);
        }
    }

    (start.elapsed(), mismatch)
}

/// ディスパッチ経路の比較テストスイート
pub struct PerformanceComparison {
    suite: DispatchBenchmarkSuite,
}

impl PerformanceComparison {
    /// 既定のスイートで比較器を作成
    pub fn new() -> DispatchResult<Self> {
        Ok(Self::with_suite(DispatchBenchmarkSuite::new()?))
    }

    pub fn with_suite(suite: DispatchBenchmarkSuite) -> Self {
        Self { suite }
    }

    /// 1ケースを `iterations` 回呼び出して計測
    ///
    /// 戻り値が [`LOOP_LIMIT`] でなければ検証エラーを返す
    pub fn measure_case(
        &self,
        case: BenchmarkCase,
        iterations: u64,
    ) -> DispatchResult<CaseMeasurement> {
        let entry = case.entry_point();
        let (elapsed, mismatch) = time_calls(iterations, || entry(black_box(&self.suite)));

        if let Some(actual) = mismatch {
            return Err(DispatchError::verification(case.name(), LOOP_LIMIT, actual));
        }

        debug!(case = case.name(), ?elapsed, "ケースを計測しました");
        Ok(CaseMeasurement::new(case, iterations, elapsed, LOOP_LIMIT))
    }

    /// 設定に従って全ケースを計測
    pub fn run(
        &self,
        config: &ComparisonConfig,
        observer: &dyn ComparisonObserver,
    ) -> DispatchResult<ComparisonReport> {
        config.validate()?;
        observer.report_started(config.cases().len(), config.iterations());

        let mut measurements = Vec::with_capacity(config.cases().len());
        for &case in config.cases() {
            let measurement = self.measure_case(case, config.iterations())?;
            observer.report_case(case, &measurement);
            measurements.push(measurement);
        }

        observer.report_completed(measurements.len());
        Ok(ComparisonReport::new(config.iterations(), measurements))
    }

    /// 結果サマリーの表示
    pub fn print_summary(report: &ComparisonReport) {
        println!("📊 ディスパッチ経路比較サマリー");
        println!("{}", "=".repeat(72));

        for measurement in &report.measurements {
            let ratio = measurement
                .ratio_to_baseline
                .map(|ratio| format!("{ratio:.2}x"))
                .unwrap_or_else(|| "-".to_string());
            let marker = if measurement.baseline { " (baseline)" } else { "" };

            println!(
                "🎯 {:<46} {:>10.2} ns  {:>8}{marker}",
                measurement.description, measurement.nanos_per_call, ratio
            );
        }

        if let Some(fastest) = report.fastest {
            println!();
            println!("🏆 Fastest: {}", fastest.description());
        }
    }
}
