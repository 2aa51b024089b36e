// メソッド検索時のバインディングフラグ

use std::ops::BitOr;

/// メソッドの属性と検索条件を表すフラグ集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MethodFlags(u8);

impl MethodFlags {
    pub const STATIC: MethodFlags = MethodFlags(0b0001);
    pub const INSTANCE: MethodFlags = MethodFlags(0b0010);
    pub const PUBLIC: MethodFlags = MethodFlags(0b0100);
    pub const NON_PUBLIC: MethodFlags = MethodFlags(0b1000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// `other` の全ビットを含むかどうか
    pub const fn contains(&self, other: MethodFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MethodFlags {
    type Output = MethodFlags;

    fn bitor(self, rhs: MethodFlags) -> MethodFlags {
        MethodFlags(self.0 | rhs.0)
    }
}
