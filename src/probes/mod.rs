// プローブレイヤー - 測定対象となるゼロサイズの能力実装

pub mod busy_loop;
pub mod explicit;
pub mod implicit;
pub mod runner;

pub use busy_loop::{busy_loop, count_to};
pub use explicit::ExplicitProbe;
pub use implicit::ImplicitProbe;
pub use runner::GENERIC_RUNNER_NAME;
pub(crate) use runner::generic_runner;
