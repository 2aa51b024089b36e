// ディスパッチベンチマーク用のカスタムエラー型定義

use thiserror::Error;

/// ディスパッチスイート固有のエラー型
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("セットアップエラー: {method} - {reason}")]
    Setup { method: String, reason: String },

    #[error("呼び出しエラー: {method} - {reason}")]
    Invocation { method: String, reason: String },

    #[error("不明なケース: {name}")]
    UnknownCase { name: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("検証エラー: {case} - 期待値 {expected}, 実際の値 {actual}")]
    Verification {
        case: String,
        expected: i32,
        actual: i32,
    },

    #[error("レポートエラー: {source}")]
    Report {
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// セットアップエラーの作成
    pub fn setup(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Setup {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// 呼び出しエラーの作成
    pub fn invocation(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invocation {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// 不明ケースエラーの作成
    pub fn unknown_case(name: impl Into<String>) -> Self {
        Self::UnknownCase { name: name.into() }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 検証エラーの作成
    pub fn verification(case: impl Into<String>, expected: i32, actual: i32) -> Self {
        Self::Verification {
            case: case.into(),
            expected,
            actual,
        }
    }

    /// レポートエラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::Report { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Setup { .. } | Self::Invocation { .. } => ErrorSeverity::Critical,
            Self::Verification { .. } => ErrorSeverity::High,
            Self::UnknownCase { .. } | Self::Configuration { .. } => ErrorSeverity::Medium,
            Self::Report { .. } => ErrorSeverity::Low,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// セットアップと呼び出しの失敗はプログラミングエラーとして扱い、再試行しない
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Setup { .. } | Self::Invocation { .. } => false,
            Self::Verification { .. } => false,
            Self::UnknownCase { .. } | Self::Configuration { .. } => true,
            Self::Report { .. } => true,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 低重要度 - ログ出力程度
    Low,
    /// 中重要度 - 入力の見直しで解決
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - スイート構築不可
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// ディスパッチ処理の結果型
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

impl From<serde_json::Error> for DispatchError {
    fn from(error: serde_json::Error) -> Self {
        DispatchError::Report {
            source: error.into(),
        }
    }
}

impl From<std::io::Error> for DispatchError {
    fn from(error: std::io::Error) -> Self {
        DispatchError::Report {
            source: error.into(),
        }
    }
}
