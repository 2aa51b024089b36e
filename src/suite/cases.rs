//! 測定ケースのカタログ
//!
//! ハーネスはこの一覧から各ケースのラベル・ベースライン指定・呼び出し方法を得る

use super::dispatch_suite::DispatchBenchmarkSuite;
use crate::core::{DispatchError, DispatchMechanism, ProbeVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 10個の測定ケース
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkCase {
    ImplicitTest,
    ExplicitTest,
    FieldImplicitTest,
    FieldExplicitTest,
    GenericImplicitTest,
    GenericExplicitTest,
    ActionImplicitTest,
    ActionExplicitTest,
    MethodInfoImplicitTest,
    MethodInfoExplicitTest,
}

impl BenchmarkCase {
    /// 宣言順の全ケース
    pub const ALL: [BenchmarkCase; 10] = [
        Self::ImplicitTest,
        Self::ExplicitTest,
        Self::FieldImplicitTest,
        Self::FieldExplicitTest,
        Self::GenericImplicitTest,
        Self::GenericExplicitTest,
        Self::ActionImplicitTest,
        Self::ActionExplicitTest,
        Self::MethodInfoImplicitTest,
        Self::MethodInfoExplicitTest,
    ];

    /// 安定した識別子
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ImplicitTest => "ImplicitTest",
            Self::ExplicitTest => "ExplicitTest",
            Self::FieldImplicitTest => "FieldImplicitTest",
            Self::FieldExplicitTest => "FieldExplicitTest",
            Self::GenericImplicitTest => "GenericImplicitTest",
            Self::GenericExplicitTest => "GenericExplicitTest",
            Self::ActionImplicitTest => "ActionImplicitTest",
            Self::ActionExplicitTest => "ActionExplicitTest",
            Self::MethodInfoImplicitTest => "MethodInfoImplicitTest",
            Self::MethodInfoExplicitTest => "MethodInfoExplicitTest",
        }
    }

    /// レポートに表示するラベル
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ImplicitTest => "Implicit Interface default() Call",
            Self::ExplicitTest => "Explicit Interface default() Call",
            Self::FieldImplicitTest => "Implicit Interface Instance Call",
            Self::FieldExplicitTest => "Explicit Interface Instance Call",
            Self::GenericImplicitTest => "Implicit Interface Generic Call",
            Self::GenericExplicitTest => "Explicit Interface Generic Call",
            Self::ActionImplicitTest => "Implicit Interface Runtime Delegate Call",
            Self::ActionExplicitTest => "Explicit Interface Runtime Delegate Call",
            Self::MethodInfoImplicitTest => "Implicit Interface Runtime MethodInfo Invoke",
            Self::MethodInfoExplicitTest => "Explicit Interface Runtime MethodInfo Invoke",
        }
    }

    pub const fn is_baseline(&self) -> bool {
        matches!(self, Self::ImplicitTest)
    }

    pub const fn mechanism(&self) -> DispatchMechanism {
        match self {
            Self::ImplicitTest | Self::ExplicitTest => DispatchMechanism::DefaultValue,
            Self::FieldImplicitTest | Self::FieldExplicitTest => DispatchMechanism::Field,
            Self::GenericImplicitTest | Self::GenericExplicitTest => DispatchMechanism::Generic,
            Self::ActionImplicitTest | Self::ActionExplicitTest => {
                DispatchMechanism::RuntimeDelegate
            }
            Self::MethodInfoImplicitTest | Self::MethodInfoExplicitTest => {
                DispatchMechanism::MethodInfoInvoke
            }
        }
    }

    pub const fn variant(&self) -> ProbeVariant {
        match self {
            Self::ImplicitTest
            | Self::FieldImplicitTest
            | Self::GenericImplicitTest
            | Self::ActionImplicitTest
            | Self::MethodInfoImplicitTest => ProbeVariant::Implicit,
            Self::ExplicitTest
            | Self::FieldExplicitTest
            | Self::GenericExplicitTest
            | Self::ActionExplicitTest
            | Self::MethodInfoExplicitTest => ProbeVariant::Explicit,
        }
    }

    /// ベースラインケース
    pub fn baseline() -> BenchmarkCase {
        Self::ImplicitTest
    }

    /// スイートの対応するエントリポイントを呼び出す
    pub fn invoke(&self, suite: &DispatchBenchmarkSuite) -> i32 {
        match self {
            Self::ImplicitTest => suite.implicit_test(),
            Self::ExplicitTest => suite.explicit_test(),
            Self::FieldImplicitTest => suite.field_implicit_test(),
            Self::FieldExplicitTest => suite.field_explicit_test(),
            Self::GenericImplicitTest => suite.generic_implicit_test(),
            Self::GenericExplicitTest => suite.generic_explicit_test(),
            Self::ActionImplicitTest => suite.action_implicit_test(),
            Self::ActionExplicitTest => suite.action_explicit_test(),
            Self::MethodInfoImplicitTest => suite.method_info_implicit_test(),
            Self::MethodInfoExplicitTest => suite.method_info_explicit_test(),
        }
    }

    /// エントリポイントの関数ポインタ
    pub fn entry_point(&self) -> fn(&DispatchBenchmarkSuite) -> i32 {
        match self {
            Self::ImplicitTest => DispatchBenchmarkSuite::implicit_test,
            Self::ExplicitTest => DispatchBenchmarkSuite::explicit_test,
            Self::FieldImplicitTest => DispatchBenchmarkSuite::field_implicit_test,
            Self::FieldExplicitTest => DispatchBenchmarkSuite::field_explicit_test,
            Self::GenericImplicitTest => DispatchBenchmarkSuite::generic_implicit_test,
            Self::GenericExplicitTest => DispatchBenchmarkSuite::generic_explicit_test,
            Self::ActionImplicitTest => DispatchBenchmarkSuite::action_implicit_test,
            Self::ActionExplicitTest => DispatchBenchmarkSuite::action_explicit_test,
            Self::MethodInfoImplicitTest => DispatchBenchmarkSuite::method_info_implicit_test,
            Self::MethodInfoExplicitTest => DispatchBenchmarkSuite::method_info_explicit_test,
        }
    }
}

impl fmt::Display for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchmarkCase {
    type Err = DispatchError;

    /// 大文字小文字・`-`・`_` を無視して識別子と照合する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |value: &str| -> String {
            value
                .chars()
                .filter(|c| *c != '-' && *c != '_')
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = normalize(s);

        Self::ALL
            .into_iter()
            .find(|case| normalize(case.name()) == wanted)
            .ok_or_else(|| DispatchError::unknown_case(s))
    }
}
