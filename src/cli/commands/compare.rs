use crate::benchmarks::{ComparisonConfig, ConsoleObserver, PerformanceComparison};
use crate::suite::BenchmarkCase;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// 簡易比較コマンドの入力
pub struct CompareOptions {
    pub iterations: u64,
    pub cases: Vec<BenchmarkCase>,
    pub output: Option<PathBuf>,
    pub force: bool,
}

impl CompareOptions {
    /// 実行設定に変換（ケース未指定なら全ケース）
    pub fn to_config(&self) -> ComparisonConfig {
        let config = ComparisonConfig::new().with_iterations(self.iterations);
        if self.cases.is_empty() {
            config
        } else {
            config.with_cases(self.cases.iter().copied())
        }
    }
}

pub fn execute_compare(options: CompareOptions) -> Result<()> {
    let config = options.to_config();
    config.validate()?;

    let comparison = PerformanceComparison::new().context("スイートの構築に失敗しました")?;
    let report = comparison.run(&config, &ConsoleObserver::new())?;

    println!();
    PerformanceComparison::print_summary(&report);

    if let Some(path) = &options.output {
        report
            .export_json(path, options.force)
            .with_context(|| format!("レポートを書き込めません: {}", path.display()))?;
        println!("📄 詳細レポートを出力しました: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_case_list_selects_all() {
        let options = CompareOptions {
            iterations: 10,
            cases: Vec::new(),
            output: None,
            force: false,
        };

        assert_eq!(options.to_config().cases().len(), 10);
    }

    #[test]
    fn test_selected_cases_are_kept() {
        let options = CompareOptions {
            iterations: 10,
            cases: vec![BenchmarkCase::ExplicitTest],
            output: None,
            force: false,
        };

        assert_eq!(options.to_config().cases(), &[BenchmarkCase::ExplicitTest]);
    }

    #[test]
    fn test_zero_iterations_fail_before_running() {
        let options = CompareOptions {
            iterations: 0,
            cases: Vec::new(),
            output: None,
            force: false,
        };

        assert!(execute_compare(options).is_err());
    }
}
