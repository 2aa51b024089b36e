// ディスパッチ比較に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// ビジーループの上限値。全ての呼び出し経路はこの値を返す
pub const LOOP_LIMIT: i32 = 100;

/// 能力の実装方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeVariant {
    /// 具象型からも直接呼び出せる実装
    Implicit,
    /// トレイト経由でのみ呼び出せる実装
    Explicit,
}

impl ProbeVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Implicit => "implicit",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for ProbeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 呼び出し経路（ディスパッチ機構）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMechanism {
    /// ゼロ値に対する直接呼び出し
    DefaultValue,
    /// フィールドに保持したトレイトオブジェクト経由
    Field,
    /// ジェネリック関数の単相化経由
    Generic,
    /// 実行時に生成したデリゲート経由
    RuntimeDelegate,
    /// 実行時メソッドハンドルの動的呼び出し
    MethodInfoInvoke,
}

impl DispatchMechanism {
    pub const ALL: [DispatchMechanism; 5] = [
        Self::DefaultValue,
        Self::Field,
        Self::Generic,
        Self::RuntimeDelegate,
        Self::MethodInfoInvoke,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultValue => "default_value",
            Self::Field => "field",
            Self::Generic => "generic",
            Self::RuntimeDelegate => "runtime_delegate",
            Self::MethodInfoInvoke => "method_info_invoke",
        }
    }

    /// 実行時ルックアップで得たハンドルを使う経路かどうか
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::RuntimeDelegate | Self::MethodInfoInvoke)
    }
}

impl fmt::Display for DispatchMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
