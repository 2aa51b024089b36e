// 実行時レイヤー - 名前によるランナー検索とハンドル生成
// 静的に単相化した関数を実行時の手順で取り出すための薄い層

pub mod flags;
pub mod handle;
pub mod registry;
pub mod type_key;

pub use flags::MethodFlags;
pub use handle::{narrow, Delegate, ErasedValue, MethodHandle};
pub use registry::{GenericMethod, RunnerRegistry};
pub use type_key::TypeKey;
