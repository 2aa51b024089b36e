// 実行時の型識別子

use std::any::TypeId;
use std::fmt;

/// 実行時に型を指定するためのキー
///
/// `TypeId` で同一性を判定し、表示用に型名を保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完全修飾された型名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// モジュールパスを除いた型名
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn test_type_key_identity() {
        assert_eq!(TypeKey::of::<Marker>(), TypeKey::of::<Marker>());
        assert_ne!(TypeKey::of::<Marker>(), TypeKey::of::<i32>());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(TypeKey::of::<Marker>().short_name(), "Marker");
        assert_eq!(TypeKey::of::<i32>().to_string(), "i32");
    }
}
