// 簡易比較の実行設定

use crate::core::{DispatchError, DispatchResult};
use crate::suite::BenchmarkCase;

/// 簡易比較の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    iterations: u64,
    cases: Vec<BenchmarkCase>,
}

impl ComparisonConfig {
    pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

    /// 全ケースを既定の反復回数で測定する設定
    pub fn new() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            cases: BenchmarkCase::ALL.to_vec(),
        }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// 測定対象ケースを指定（重複は先勝ちで除去）
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = BenchmarkCase>) -> Self {
        let mut selected = Vec::new();
        for case in cases {
            if !selected.contains(&case) {
                selected.push(case);
            }
        }
        self.cases = selected;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn cases(&self) -> &[BenchmarkCase] {
        &self.cases
    }

    /// 設定値の検証
    pub fn validate(&self) -> DispatchResult<()> {
        if self.iterations == 0 {
            return Err(DispatchError::configuration(
                "反復回数は1以上である必要があります",
            ));
        }
        if self.cases.is_empty() {
            return Err(DispatchError::configuration(
                "測定ケースが1つも選択されていません",
            ));
        }
        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::new()
    }
}
