//! 実行時メソッドハンドルとデリゲート
//!
//! ジェネリックランナーの具象インスタンス1つを指す不透明なハンドル。
//! - `invoke`: 型消去された引数・戻り値で呼び出す（毎回ボックス化と型検査が入る）
//! - `create_delegate`: 一度だけシグネチャを検査し、関数ポインタとして呼べる形にする

use super::type_key::TypeKey;
use crate::core::{DispatchError, DispatchResult};
use std::any::Any;
use std::fmt;

/// 型消去された値
pub type ErasedValue = Box<dyn Any + Send>;

/// ジェネリックメソッドの具象インスタンスへのハンドル
#[derive(Clone, Copy)]
pub struct MethodHandle {
    method: &'static str,
    type_argument: TypeKey,
    return_type: TypeKey,
    entry: fn() -> i32,
}

impl MethodHandle {
    pub(crate) fn new(method: &'static str, type_argument: TypeKey, entry: fn() -> i32) -> Self {
        Self {
            method,
            type_argument,
            return_type: TypeKey::of::<i32>(),
            entry,
        }
    }

    /// `generic_runner<ImplicitProbe>` 形式の表示名
    pub fn name(&self) -> String {
        format!("{}<{}>", self.method, self.type_argument)
    }

    pub fn type_argument(&self) -> TypeKey {
        self.type_argument
    }

    /// 引数なしのメソッドとして動的に呼び出す
    pub fn invoke(&self, args: &[ErasedValue]) -> DispatchResult<ErasedValue> {
        if !args.is_empty() {
            return Err(DispatchError::invocation(
                self.name(),
                format!("引数の数が一致しません: 期待 0, 実際 {}", args.len()),
            ));
        }
        Ok(Box::new((self.entry)()))
    }

    /// 呼び出し結果を期待する型に絞り込む
    pub fn invoke_as<R: 'static>(&self, args: &[ErasedValue]) -> DispatchResult<R> {
        let value = self.invoke(args)?;
        narrow(value, &self.name())
    }

    /// 戻り値型 `R` のデリゲートを作成する
    pub fn create_delegate<R: 'static>(&self) -> DispatchResult<Delegate> {
        let requested = TypeKey::of::<R>();
        if requested != self.return_type {
            return Err(DispatchError::invocation(
                self.name(),
                format!(
                    "デリゲートの戻り値型が一致しません: 期待 {}, 要求 {}",
                    self.return_type, requested
                ),
            ));
        }
        Ok(Delegate {
            name: self.name(),
            target: self.entry,
        })
    }
}

impl fmt::Debug for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodHandle")
            .field("name", &self.name())
            .field("return_type", &self.return_type.short_name())
            .finish()
    }
}

/// 型消去された値を `R` に絞り込む
pub fn narrow<R: 'static>(value: ErasedValue, method: &str) -> DispatchResult<R> {
    value.downcast::<R>().map(|boxed| *boxed).map_err(|_| {
        DispatchError::invocation(
            method,
            format!("戻り値を {} に変換できません", TypeKey::of::<R>()),
        )
    })
}

/// 作成済みの引数なし呼び出し可能オブジェクト
#[derive(Clone)]
pub struct Delegate {
    name: String,
    target: fn() -> i32,
}

impl Delegate {
    #[inline]
    pub fn call(&self) -> i32 {
        (self.target)()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate").field("name", &self.name).finish()
    }
}
