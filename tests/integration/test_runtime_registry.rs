// ランナーレジストリとスイート構築の統合テスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use dispatch_bench::probes::GENERIC_RUNNER_NAME;
use dispatch_bench::reflection::{MethodFlags, RunnerRegistry, TypeKey};
use dispatch_bench::{
    BenchmarkCase, Capability, DispatchBenchmarkSuite, DispatchError, ExplicitProbe,
    ImplicitProbe,
};
use fixtures::ShortLoopProbe;

fn private_static() -> MethodFlags {
    MethodFlags::STATIC | MethodFlags::NON_PUBLIC
}

#[test]
fn test_unknown_method_name_is_setup_failure() {
    let registry = RunnerRegistry::with_default_runners();
    let error = registry.get_method("GenericRunner2", private_static()).unwrap_err();

    assert!(matches!(error, DispatchError::Setup { .. }));
    assert!(!error.is_recoverable());
}

#[test]
fn test_custom_probe_registration() {
    let mut registry = RunnerRegistry::with_default_runners();
    registry.register::<ShortLoopProbe>(GENERIC_RUNNER_NAME, private_static());

    let method = registry.get_method(GENERIC_RUNNER_NAME, private_static()).unwrap();
    let handle = method.make_generic(TypeKey::of::<ShortLoopProbe>()).unwrap();

    assert_eq!(method.type_arguments().len(), 3);
    assert_eq!(handle.invoke_as::<i32>(&[]).unwrap(), ShortLoopProbe::default().run());
    assert_eq!(handle.create_delegate::<i32>().unwrap().call(), 42);

    let suite = DispatchBenchmarkSuite::with_registry(&registry).unwrap();
    for case in BenchmarkCase::ALL {
        assert_eq!(case.invoke(&suite), 100, "{case}");
    }
}

#[test]
fn test_invocation_failures() {
    let registry = RunnerRegistry::with_default_runners();
    let method = registry.get_method(GENERIC_RUNNER_NAME, private_static()).unwrap();
    let handle = method.make_generic(TypeKey::of::<ExplicitProbe>()).unwrap();

    let args: Vec<Box<dyn std::any::Any + Send>> = vec![Box::new(())];
    assert!(matches!(handle.invoke(&args), Err(DispatchError::Invocation { .. })));
    assert!(matches!(
        handle.create_delegate::<u64>(),
        Err(DispatchError::Invocation { .. })
    ));
    assert!(matches!(
        handle.invoke_as::<String>(&[]),
        Err(DispatchError::Invocation { .. })
    ));
}

#[test]
fn test_suite_requires_private_static_runner() {
    let mut registry = RunnerRegistry::new();
    registry.register::<ShortLoopProbe>(
        GENERIC_RUNNER_NAME,
        MethodFlags::INSTANCE | MethodFlags::PUBLIC,
    );

    let result = DispatchBenchmarkSuite::with_registry(&registry);
    assert!(matches!(result, Err(DispatchError::Setup { .. })));
}

#[test]
fn test_handles_match_direct_trait_call() {
    let mut registry = RunnerRegistry::with_default_runners();
    registry.register::<ShortLoopProbe>(GENERIC_RUNNER_NAME, private_static());
    let method = registry.get_method(GENERIC_RUNNER_NAME, private_static()).unwrap();

    let expected = [
        (TypeKey::of::<ImplicitProbe>(), Capability::run(&ImplicitProbe::default())),
        (TypeKey::of::<ExplicitProbe>(), ExplicitProbe::default().run()),
        (TypeKey::of::<ShortLoopProbe>(), ShortLoopProbe::default().run()),
    ];

    for (type_argument, direct) in expected {
        let handle = method.make_generic(type_argument).unwrap();
        assert_eq!(handle.invoke_as::<i32>(&[]).unwrap(), direct, "{type_argument}");
        assert_eq!(handle.create_delegate::<i32>().unwrap().call(), direct);
    }
}
