use crate::suite::BenchmarkCase;

/// ケース一覧の1行を整形
///
/// 実行時ルックアップで得たハンドルを使うケースには ⚡ を付ける
pub fn format_case_line(case: BenchmarkCase) -> String {
    let runtime = if case.mechanism().is_runtime() { "⚡" } else { "  " };
    let baseline = if case.is_baseline() { " [baseline]" } else { "" };
    format!(
        "{runtime} {:<24} {:<20} {:<8} {}{baseline}",
        case.name(),
        case.mechanism().as_str(),
        case.variant().as_str(),
        case.description()
    )
}

pub fn execute_list() {
    println!("📋 ベンチマークケース一覧");
    for case in BenchmarkCase::ALL {
        println!("  {}", format_case_line(case));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_marker_only_on_baseline() {
        let baseline = format_case_line(BenchmarkCase::ImplicitTest);
        assert!(baseline.ends_with("[baseline]"));
        assert!(baseline.contains("Implicit Interface default() Call"));

        let other = format_case_line(BenchmarkCase::MethodInfoExplicitTest);
        assert!(!other.contains("[baseline]"));
        assert!(other.contains("method_info_invoke"));
    }

    #[test]
    fn test_runtime_marker_follows_mechanism() {
        let marked: Vec<_> = BenchmarkCase::ALL
            .into_iter()
            .filter(|case| format_case_line(*case).starts_with('⚡'))
            .collect();

        assert_eq!(
            marked,
            vec![
                BenchmarkCase::ActionImplicitTest,
                BenchmarkCase::ActionExplicitTest,
                BenchmarkCase::MethodInfoImplicitTest,
                BenchmarkCase::MethodInfoExplicitTest,
            ]
        );
        assert!(!format_case_line(BenchmarkCase::GenericImplicitTest).starts_with('⚡'));
    }
}
