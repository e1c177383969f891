use budget_pace::{calculate_bar, BarStatus};
use insta::assert_snapshot;

fn message_for(actual: f64) -> String {
    calculate_bar(actual, 100.0).message
}

#[test]
fn messages_per_band() {
    assert_snapshot!(message_for(50.0), @"Well under budget!");
    assert_snapshot!(message_for(90.0), @"Slightly under budget");
    assert_snapshot!(message_for(100.0), @"Right on track");
    assert_snapshot!(message_for(110.0), @"Slightly over budget");
    assert_snapshot!(message_for(200.0), @"Significantly over budget!");
}

#[test]
fn message_matches_status() {
    for actual in [10.0, 86.0, 99.0, 112.0, 400.0] {
        let result = calculate_bar(actual, 100.0);
        assert_eq!(result.message, result.status.message());
    }
    assert_eq!(BarStatus::Warning.to_string(), "warning");
}
