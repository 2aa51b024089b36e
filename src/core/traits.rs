// ディスパッチ対象の能力（Capability）トレイト定義

/// 1つの操作だけを公開する能力トレイト
///
/// `run` は 0 から 100 まで数えるビジーループを実行し、最終カウンタ値を返す。
/// 純粋・決定的で副作用を持たない。
pub trait Capability {
    /// ビジーループを実行して最終カウンタ値を返す
    fn run(&self) -> i32;
}

/// 汎用ランナーに渡せる値型の制約
///
/// ゼロ値（`Default`）から構築できる `Copy` な能力実装のみを許可する
pub trait ValueCapability: Capability + Default + Copy + Send + Sync + 'static {}

impl<T> ValueCapability for T where T: Capability + Default + Copy + Send + Sync + 'static {}

/// トレイトオブジェクトとして保持する能力の型エイリアス
pub type SharedCapability = Box<dyn Capability + Send + Sync>;
