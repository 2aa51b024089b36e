//! 暗黙的・明示的なトレイト実装の呼び出しコストを比較するマイクロベンチマーク
//!
//! - `probes`: 測定対象のゼロサイズ能力実装
//! - `reflection`: 名前で検索するランナーレジストリ
//! - `suite`: 10個の測定エントリポイントとケースカタログ
//! - `benchmarks`: 簡易比較とレポート

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod probes;
pub mod reflection;
pub mod suite;

pub use crate::core::{Capability, DispatchError, DispatchResult, LOOP_LIMIT};
pub use probes::{ExplicitProbe, ImplicitProbe};
pub use suite::{BenchmarkCase, DispatchBenchmarkSuite};
