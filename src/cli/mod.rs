// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとスイートの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;

use crate::core::DispatchError;
use anyhow::Result;

/// 解析済みの引数に従ってコマンドを実行
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            execute_list();
            Ok(())
        }
        Commands::Verify { rounds } => execute_verify(rounds),
        Commands::Compare {
            iterations,
            cases,
            output,
            force,
        } => execute_compare(CompareOptions {
            iterations,
            cases,
            output,
            force,
        }),
    }
}

/// 失敗時の終了コードとメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub message: String,
    pub exit_code: i32,
}

/// エラーチェーン中の `DispatchError` から重要度付きの報告を作る
///
/// 入力の見直しで解決できるエラーは終了コード 2、それ以外は 1
pub fn failure_report(error: &anyhow::Error) -> FailureReport {
    let dispatch_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<DispatchError>());

    match dispatch_error {
        Some(dispatch_error) => FailureReport {
            message: format!(
                "❌ [{}] エラー: {error:#}",
                dispatch_error.severity().as_str()
            ),
            exit_code: if dispatch_error.is_recoverable() { 2 } else { 1 },
        },
        None => FailureReport {
            message: format!("❌ エラー: {error:#}"),
            exit_code: 1,
        },
    }
}
