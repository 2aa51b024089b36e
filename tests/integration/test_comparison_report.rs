// 簡易比較とレポート出力の統合テスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use dispatch_bench::benchmarks::{
    ComparisonConfig, ComparisonReport, NoOpObserver, PerformanceComparison,
};
use dispatch_bench::core::DispatchMechanism;
use dispatch_bench::suite::verify_cases;
use dispatch_bench::BenchmarkCase;
use fixtures::build_suite;
use tempfile::TempDir;

#[test]
fn test_full_comparison_report() {
    let comparison = PerformanceComparison::with_suite(build_suite());
    let config = ComparisonConfig::new().with_iterations(100);

    let report = comparison.run(&config, &NoOpObserver::new()).unwrap();

    assert_eq!(report.iterations, 100);
    assert_eq!(report.measurements.len(), BenchmarkCase::ALL.len());
    assert!(report.measurements.iter().all(|m| m.result == 100));
    assert_eq!(report.measurements.iter().filter(|m| m.baseline).count(), 1);
    assert!(report.fastest.is_some());
}

#[test]
fn test_report_json_export() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("dispatch.json");
    let comparison = PerformanceComparison::with_suite(build_suite());
    let config = ComparisonConfig::new()
        .with_iterations(10)
        .with_cases([BenchmarkCase::ImplicitTest, BenchmarkCase::MethodInfoExplicitTest]);

    let report = comparison.run(&config, &NoOpObserver::new()).unwrap();
    report.export_json(&output, false).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let parsed: ComparisonReport = serde_json::from_str(&content).unwrap();
    let invoke = parsed.measurement(BenchmarkCase::MethodInfoExplicitTest).unwrap();

    assert_eq!(invoke.mechanism, DispatchMechanism::MethodInfoInvoke);
    assert_eq!(invoke.description, "Explicit Interface Runtime MethodInfo Invoke");
    assert!(!parsed.timestamp.is_empty());
}

#[test]
fn test_verify_cases_over_suite() {
    let suite = build_suite();
    let summary = verify_cases(&suite, &BenchmarkCase::ALL, 5).unwrap();

    assert_eq!(summary.invocations, 50);
}
