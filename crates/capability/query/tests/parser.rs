//! 规则顺序与提取行为测试。

use pacs_query::{QueryIntent, WindowUnit, parse_query};

#[test]
fn denied_rule_wins_over_recent_window() {
    // 同时包含 "denied" 与 "last 3 days"：规则表中 denied 优先
    let parsed = parse_query("show me denied access from the last 3 days");
    assert_eq!(parsed.rule, "denied-access");
    match parsed.intent {
        QueryIntent::DeniedAccess { window: Some(window) } => {
            assert_eq!(window.value, 3);
            assert_eq!(window.unit, WindowUnit::Days);
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn plain_window_parses_value_and_unit() {
    let parsed = parse_query("what happened in the last 2 weeks");
    match parsed.intent {
        QueryIntent::RecentWindow { window } => {
            assert_eq!(window.value, 2);
            assert_eq!(window.unit, WindowUnit::Weeks);
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn window_without_number_defaults_to_one() {
    let parsed = parse_query("events from the past month");
    match parsed.intent {
        QueryIntent::RecentWindow { window } => {
            assert_eq!(window.value, 1);
            assert_eq!(window.unit, WindowUnit::Months);
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn quoted_door_name_is_extracted_verbatim() {
    let parsed = parse_query("activity at \"Server Room\" today");
    assert_eq!(parsed.rule, "door-activity-quoted");
    assert_eq!(
        parsed.intent,
        QueryIntent::DoorActivity {
            door_name: "Server Room".to_string()
        }
    );
}

#[test]
fn at_the_x_door_phrase_is_extracted() {
    let parsed = parse_query("who was at the main entrance door yesterday");
    assert_eq!(
        parsed.intent,
        QueryIntent::DoorActivity {
            door_name: "main entrance".to_string()
        }
    );
}

#[test]
fn building_letter_is_uppercased() {
    let parsed = parse_query("show activity in building b");
    assert_eq!(
        parsed.intent,
        QueryIntent::BuildingActivity {
            building: "B".to_string()
        }
    );
}

#[test]
fn busiest_doors_and_cardholders_are_distinct() {
    assert_eq!(parse_query("busiest doors this week").intent, QueryIntent::TopDoors);
    assert_eq!(
        parse_query("most active cardholders").intent,
        QueryIntent::TopCardholders
    );
}

#[test]
fn unmatched_question_is_unrecognized() {
    let parsed = parse_query("how do I bake sourdough bread");
    assert_eq!(parsed.intent, QueryIntent::Unrecognized);
    assert_eq!(parsed.rule, "none");
}

#[test]
fn parsing_is_deterministic() {
    let a = parse_query("faults in building a");
    let b = parse_query("faults in building a");
    // faults 规则优先于 building；两次解析结果一致
    assert_eq!(a.intent, QueryIntent::Faults);
    assert_eq!(a.intent, b.intent);
    assert_eq!(a.rule, b.rule);
}
