// 全呼び出し経路の等価性に関する統合テスト

#[path = "../fixtures/mod.rs"]
mod fixtures;

use dispatch_bench::{
    BenchmarkCase, Capability, DispatchBenchmarkSuite, ExplicitProbe, ImplicitProbe, LOOP_LIMIT,
};
use fixtures::build_suite;
use std::sync::Arc;
use std::thread;

#[test]
fn test_all_entry_points_return_100() {
    let suite = build_suite();

    for case in BenchmarkCase::ALL {
        assert_eq!(case.invoke(&suite), 100, "{}", case.description());
    }
}

#[test]
fn test_entry_points_are_equivalent() {
    let suite = build_suite();
    let results = [
        suite.implicit_test(),
        suite.explicit_test(),
        suite.field_implicit_test(),
        suite.field_explicit_test(),
        suite.generic_implicit_test(),
        suite.generic_explicit_test(),
        suite.action_implicit_test(),
        suite.action_explicit_test(),
        suite.method_info_implicit_test(),
        suite.method_info_explicit_test(),
    ];

    assert!(results.iter().all(|&value| value == LOOP_LIMIT));
}

#[test]
fn test_repeated_calls_in_any_order_are_idempotent() {
    let suite = build_suite();

    for round in 0..50 {
        let mut cases = BenchmarkCase::ALL;
        let len = cases.len();
        cases.rotate_left(round % len);
        if round % 2 == 1 {
            cases.reverse();
        }

        for case in cases {
            assert_eq!(case.invoke(&suite), 100);
        }
    }
}

#[test]
fn test_two_suites_behave_identically() {
    let first = build_suite();
    let second = DispatchBenchmarkSuite::new().unwrap();

    for case in BenchmarkCase::ALL {
        assert_eq!(case.invoke(&first), case.invoke(&second));
    }
    assert_eq!(first.implicit_method().name(), second.implicit_method().name());
}

#[test]
fn test_generic_explicit_and_method_info_scenario() {
    let suite = build_suite();

    assert_eq!(suite.generic_explicit_test(), 100);

    let erased = suite.implicit_method().invoke(&[]).unwrap();
    assert!(erased.is::<i32>());
    assert!(!erased.is::<i64>());
    assert_eq!(suite.try_method_info_implicit_test().unwrap(), 100_i32);
}

#[test]
fn test_explicit_probe_only_through_capability() {
    let implicit = ImplicitProbe;
    let explicit: &dyn Capability = &ExplicitProbe;

    assert_eq!(implicit.run(), explicit.run());
    assert_eq!(std::mem::size_of::<ImplicitProbe>(), 0);
    assert_eq!(std::mem::size_of::<ExplicitProbe>(), 0);
}

#[test]
fn test_concurrent_invocation() {
    let suite = Arc::new(build_suite());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let suite = Arc::clone(&suite);
            thread::spawn(move || {
                BenchmarkCase::ALL
                    .iter()
                    .map(|case| case.invoke(&suite))
                    .sum::<i32>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1000);
    }
}
