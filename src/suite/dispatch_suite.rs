//! ディスパッチ経路比較スイート
//!
//! 暗黙的実装と明示的実装の能力呼び出しを、5種類の経路で測定するための
//! 10個のエントリポイントを提供する。ハンドルとデリゲートは構築時に一度だけ
//! 用意し、以降は変更しない。
//!
//! 各エントリポイントは `#[inline(never)]` で、ハーネスからは独立した呼び出し
//! として観測される。

use crate::core::{Capability, DispatchResult, SharedCapability};
use crate::probes::{generic_runner, ExplicitProbe, ImplicitProbe, GENERIC_RUNNER_NAME};
use crate::reflection::{Delegate, MethodFlags, MethodHandle, RunnerRegistry, TypeKey};
use std::hint::black_box;
use tracing::debug;

/// 測定エントリポイントを持つベンチマークスイート
pub struct DispatchBenchmarkSuite {
    field_implicit: SharedCapability,
    field_explicit: SharedCapability,
    compiled_implicit: Delegate,
    compiled_explicit: Delegate,
    implicit_method: MethodHandle,
    explicit_method: MethodHandle,
}

impl DispatchBenchmarkSuite {
    /// 既定のランナーレジストリからスイートを構築
    pub fn new() -> DispatchResult<Self> {
        Self::with_registry(&RunnerRegistry::with_default_runners())
    }

    /// 指定したレジストリからランナーを検索してスイートを構築
    ///
    /// 検索・具象化・デリゲート作成のいずれかに失敗した場合は
    /// `DispatchError::Setup` / `DispatchError::Invocation` をそのまま返す
    pub fn with_registry(registry: &RunnerRegistry) -> DispatchResult<Self> {
        let method = registry.get_method(
            GENERIC_RUNNER_NAME,
            MethodFlags::STATIC | MethodFlags::NON_PUBLIC,
        )?;

        let explicit_method = method.make_generic(TypeKey::of::<ExplicitProbe>())?;
        let compiled_explicit = explicit_method.create_delegate::<i32>()?;

        let implicit_method = method.make_generic(TypeKey::of::<ImplicitProbe>())?;
        let compiled_implicit = implicit_method.create_delegate::<i32>()?;

        debug!(
            implicit = %implicit_method.name(),
            explicit = %explicit_method.name(),
            "ディスパッチスイートを構築しました"
        );

        Ok(Self {
            field_implicit: Box::new(ImplicitProbe),
            field_explicit: Box::new(ExplicitProbe),
            compiled_implicit,
            compiled_explicit,
            implicit_method,
            explicit_method,
        })
    }

    /// 暗黙的実装のゼロ値に対する直接呼び出し（ベースライン）
    #[inline(never)]
    pub fn implicit_test(&self) -> i32 {
        black_box(ImplicitProbe::default()).run()
    }

    /// 明示的実装のゼロ値を能力ビュー経由で呼び出し
    #[inline(never)]
    pub fn explicit_test(&self) -> i32 {
        let probe = black_box(ExplicitProbe::default());
        (&probe as &dyn Capability).run()
    }

    #[inline(never)]
    pub fn field_implicit_test(&self) -> i32 {
        self.field_implicit.run()
    }

    #[inline(never)]
    pub fn field_explicit_test(&self) -> i32 {
        self.field_explicit.run()
    }

    #[inline(never)]
    pub fn generic_implicit_test(&self) -> i32 {
        generic_runner::<ImplicitProbe>()
    }

    #[inline(never)]
    pub fn generic_explicit_test(&self) -> i32 {
        generic_runner::<ExplicitProbe>()
    }

    /// 構築時に作成したデリゲート経由の呼び出し
    #[inline(never)]
    pub fn action_implicit_test(&self) -> i32 {
        self.compiled_implicit.call()
    }

    #[inline(never)]
    pub fn action_explicit_test(&self) -> i32 {
        self.compiled_explicit.call()
    }

    /// メソッドハンドルを動的に呼び出し、戻り値を `i32` に絞り込む
    ///
    /// 失敗はプログラミングエラーとして扱い panic する
    #[inline(never)]
    pub fn method_info_implicit_test(&self) -> i32 {
        self.try_method_info_implicit_test()
            .unwrap_or_else(|e| panic!("{e}"))
    }

    #[inline(never)]
    pub fn method_info_explicit_test(&self) -> i32 {
        self.try_method_info_explicit_test()
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_method_info_implicit_test(&self) -> DispatchResult<i32> {
        self.implicit_method.invoke_as::<i32>(&[])
    }

    pub fn try_method_info_explicit_test(&self) -> DispatchResult<i32> {
        self.explicit_method.invoke_as::<i32>(&[])
    }

    /// 暗黙的実装インスタンスのメソッドハンドル
    pub fn implicit_method(&self) -> &MethodHandle {
        &self.implicit_method
    }

    /// 明示的実装インスタンスのメソッドハンドル
    pub fn explicit_method(&self) -> &MethodHandle {
        &self.explicit_method
    }
}
