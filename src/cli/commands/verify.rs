use crate::suite::{verify_cases, BenchmarkCase, DispatchBenchmarkSuite};
use anyhow::{Context, Result};

/// 全ケースの戻り値を検証
pub fn execute_verify(rounds: usize) -> Result<()> {
    let suite = DispatchBenchmarkSuite::new().context("スイートの構築に失敗しました")?;

    let summary = verify_cases(&suite, &BenchmarkCase::ALL, rounds)?;

    println!(
        "✅ {} ケース x {} ラウンド ({} 回の呼び出し) が全て 100 を返しました",
        summary.cases, summary.rounds, summary.invocations
    );
    Ok(())
}
