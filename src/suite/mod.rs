// スイートレイヤー - 測定エントリポイントとケースカタログ

pub mod cases;
pub mod dispatch_suite;
pub mod verification;

pub use cases::BenchmarkCase;
pub use dispatch_suite::DispatchBenchmarkSuite;
pub use verification::{verify_cases, VerificationSummary};
