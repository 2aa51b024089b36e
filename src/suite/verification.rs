// 全エントリポイントの戻り値検証

use super::cases::BenchmarkCase;
use super::dispatch_suite::DispatchBenchmarkSuite;
use crate::core::{DispatchError, DispatchResult, LOOP_LIMIT};
use tracing::{debug, error};

/// 検証結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSummary {
    pub rounds: usize,
    pub cases: usize,
    pub invocations: usize,
}

/// 全ケースを `rounds` 回ずつ呼び出し、全て [`LOOP_LIMIT`] を返すことを確認する
///
/// 最初に不一致を見つけたケースで `DispatchError::Verification` を返す
pub fn verify_cases(
    suite: &DispatchBenchmarkSuite,
    cases: &[BenchmarkCase],
    rounds: usize,
) -> DispatchResult<VerificationSummary> {
    if rounds == 0 {
        return Err(DispatchError::configuration("検証回数は1以上である必要があります"));
    }

    let mut invocations = 0;
    for round in 0..rounds {
        for &case in cases {
            let actual = case.invoke(suite);
            invocations += 1;

            if actual != LOOP_LIMIT {
                error!(case = case.name(), round, actual, "戻り値が一致しません");
                return Err(DispatchError::verification(case.name(), LOOP_LIMIT, actual));
            }
        }
        debug!(round, "検証ラウンド完了");
    }

    Ok(VerificationSummary {
        rounds,
        cases: cases.len(),
        invocations,
    })
}
