//! 名前で検索できるジェネリックランナーのレジストリ
//!
//! コンパイル時に単相化した関数ポインタを `TypeId` で索引し、
//! 「名前で検索 → 型引数で具象化 → ハンドル取得」という実行時の手順を再現する。

use super::flags::MethodFlags;
use super::handle::MethodHandle;
use super::type_key::TypeKey;
use crate::core::{DispatchError, DispatchResult, ValueCapability};
use crate::probes::{generic_runner, ExplicitProbe, ImplicitProbe, GENERIC_RUNNER_NAME};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// ジェネリックメソッド定義
#[derive(Debug)]
struct GenericMethodDef {
    name: &'static str,
    flags: MethodFlags,
    instantiations: HashMap<TypeId, MethodHandle>,
}

/// ジェネリックランナーのレジストリ
#[derive(Debug, Default)]
pub struct RunnerRegistry {
    methods: HashMap<&'static str, GenericMethodDef>,
}

impl RunnerRegistry {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// 両プローブ向けの `generic_runner` を登録済みのレジストリ
    pub fn with_default_runners() -> Self {
        let mut registry = Self::new();
        let flags = MethodFlags::STATIC | MethodFlags::NON_PUBLIC;

        registry.register::<ImplicitProbe>(GENERIC_RUNNER_NAME, flags);
        registry.register::<ExplicitProbe>(GENERIC_RUNNER_NAME, flags);
        registry
    }

    /// `generic_runner::<T>` を `name` の具象インスタンスとして登録
    ///
    /// 同名メソッドの属性は最初の登録で確定し、以降の `flags` は無視される
    pub fn register<T: ValueCapability>(&mut self, name: &'static str, flags: MethodFlags) {
        let entry: fn() -> i32 = generic_runner::<T>;
        let type_argument = TypeKey::of::<T>();
        let def = self.methods.entry(name).or_insert_with(|| GenericMethodDef {
            name,
            flags,
            instantiations: HashMap::new(),
        });

        def.instantiations
            .insert(type_argument.id(), MethodHandle::new(name, type_argument, entry));
        debug!(method = name, type_argument = %type_argument, "ランナーを登録しました");
    }

    /// 名前とフラグでジェネリックメソッドを検索
    ///
    /// メソッドの属性ビットが全て `flags` に含まれている場合のみ見つかる
    pub fn get_method(&self, name: &str, flags: MethodFlags) -> DispatchResult<GenericMethod<'_>> {
        let def = self
            .methods
            .get(name)
            .ok_or_else(|| DispatchError::setup(name, "メソッドが見つかりません"))?;

        if !flags.contains(def.flags) {
            return Err(DispatchError::setup(
                name,
                format!(
                    "バインディングフラグが一致しません: 要求 {:#06b}, 定義 {:#06b}",
                    flags.bits(),
                    def.flags.bits()
                ),
            ));
        }

        debug!(method = name, "メソッドを解決しました");
        Ok(GenericMethod { def })
    }

    /// 登録済みのメソッド名一覧
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// 検索済みのジェネリックメソッド（未具象化）
#[derive(Debug, Clone, Copy)]
pub struct GenericMethod<'a> {
    def: &'a GenericMethodDef,
}

impl GenericMethod<'_> {
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// 型引数を指定して具象インスタンスのハンドルを得る
    pub fn make_generic(&self, type_argument: TypeKey) -> DispatchResult<MethodHandle> {
        self.def
            .instantiations
            .get(&type_argument.id())
            .copied()
            .ok_or_else(|| {
                DispatchError::setup(
                    self.def.name,
                    format!("型引数 {type_argument} は制約を満たしていません"),
                )
            })
    }

    /// 具象化可能な型引数の一覧
    pub fn type_arguments(&self) -> Vec<TypeKey> {
        let mut keys: Vec<_> = self
            .def
            .instantiations
            .values()
            .map(|handle| handle.type_argument())
            .collect();
        keys.sort_by_key(|key| key.name());
        keys
    }
}
