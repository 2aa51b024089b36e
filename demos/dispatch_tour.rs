use dispatch_bench::probes::GENERIC_RUNNER_NAME;
use dispatch_bench::reflection::{MethodFlags, RunnerRegistry, TypeKey};
use dispatch_bench::{
    BenchmarkCase, Capability, DispatchBenchmarkSuite, ExplicitProbe, ImplicitProbe,
};

fn main() -> anyhow::Result<()> {
    println!("=== ディスパッチ経路ツアー ===\n");

    // 1. プローブはゼロサイズ
    println!("1. プローブのサイズ:");
    println!("  ImplicitProbe: {} bytes", std::mem::size_of::<ImplicitProbe>());
    println!("  ExplicitProbe: {} bytes", std::mem::size_of::<ExplicitProbe>());
    println!();

    // 2. 暗黙的実装は具象型から、明示的実装はトレイト経由でのみ呼べる
    println!("2. 直接呼び出し:");
    println!("  ImplicitProbe.run() = {}", ImplicitProbe.run());
    let explicit: &dyn Capability = &ExplicitProbe;
    println!("  (&ExplicitProbe as &dyn Capability).run() = {}", explicit.run());
    println!();

    // 3. 名前によるランナー検索
    println!("3. ランナー検索:");
    let registry = RunnerRegistry::with_default_runners();
    println!("  登録済み: {:?}", registry.method_names());
    let flags = MethodFlags::STATIC | MethodFlags::NON_PUBLIC;
    let method = registry.get_method(GENERIC_RUNNER_NAME, flags)?;
    for type_argument in method.type_arguments() {
        let handle = method.make_generic(type_argument)?;
        println!("  {} -> {}", handle.name(), handle.invoke_as::<i32>(&[])?);
    }
    println!("  u8 の具象化: {}", method.make_generic(TypeKey::of::<u8>()).is_ok());
    println!();

    // 4. 全エントリポイント
    println!("4. 全エントリポイント:");
    let suite = DispatchBenchmarkSuite::with_registry(&registry)?;
    for case in BenchmarkCase::ALL {
        println!("  {:<46} = {}", case.description(), case.invoke(&suite));
    }

    Ok(())
}
