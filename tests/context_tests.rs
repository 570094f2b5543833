//! Integration tests for the `Context` carrier.

use fnlattice::Context;
use rstest::rstest;
use std::thread;

#[derive(Debug, PartialEq)]
struct RequestId;

#[derive(Debug, PartialEq)]
enum Setting {
    Locale,
    Retries,
}

// =============================================================================
// Bindings
// =============================================================================

#[rstest]
fn keys_of_different_types_never_collide() {
    let context = Context::new()
        .with_value("id", 1_u32)
        .with_value(RequestId, String::from("req-7"))
        .with_value(7_u8, "seven");

    assert_eq!(context.value::<_, u32>(&"id"), Some(&1));
    assert_eq!(context.value::<_, String>(&RequestId).map(String::as_str), Some("req-7"));
    assert_eq!(context.value::<_, &str>(&7_u8), Some(&"seven"));
    assert_eq!(context.value::<_, &str>(&7_i32), None);
}

#[rstest]
#[case::locale(Setting::Locale, Some("en-GB"))]
#[case::retries(Setting::Retries, None)]
fn enum_keys_compare_by_value(#[case] key: Setting, #[case] expected: Option<&str>) {
    let context = Context::new()
        .with_value(Setting::Locale, "en-GB")
        .with_value(Setting::Retries, 3_u8);

    assert_eq!(context.value::<_, &str>(&key).copied(), expected);
}

#[rstest]
fn newest_binding_shadows_older_ones() {
    let first = Context::new().with_value("attempt", 1);
    let second = first.with_value("attempt", 2);
    let third = second.with_value("attempt", 3);

    assert_eq!(first.value::<_, i32>(&"attempt"), Some(&1));
    assert_eq!(second.value::<_, i32>(&"attempt"), Some(&2));
    assert_eq!(third.value::<_, i32>(&"attempt"), Some(&3));
    assert_eq!(third.len(), 3);
}

#[rstest]
fn shadowing_with_another_value_type_hides_the_older_value() {
    let context = Context::new()
        .with_value("limit", 10_i32)
        .with_value("limit", "unbounded");

    assert_eq!(context.value::<_, i32>(&"limit"), None);
    assert_eq!(context.value::<_, &str>(&"limit"), Some(&"unbounded"));
    assert!(context.contains_key(&"limit"));
}

#[rstest]
fn default_and_new_are_both_empty() {
    let created = Context::new();
    let defaulted = Context::default();

    assert!(created.is_empty());
    assert!(defaulted.is_empty());
    assert_eq!(format!("{defaulted:?}"), "Context { bindings: 0, .. }");
}

// =============================================================================
// Sharing
// =============================================================================

#[rstest]
fn branches_from_a_shared_parent_are_independent() {
    let parent = Context::new().with_value("tenant", "acme");
    let left = parent.with_value("side", "left");
    let right = parent.with_value("side", "right");

    drop(parent);

    assert_eq!(left.value::<_, &str>(&"side"), Some(&"left"));
    assert_eq!(right.value::<_, &str>(&"side"), Some(&"right"));
    assert_eq!(left.value::<_, &str>(&"tenant"), Some(&"acme"));
    assert_eq!(right.value::<_, &str>(&"tenant"), Some(&"acme"));
}

#[rstest]
fn contexts_can_be_read_and_extended_from_many_threads() {
    let shared = Context::new().with_value("region", "eu");

    let derived: Vec<Context> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4_usize)
            .map(|worker| {
                let base = &shared;
                scope.spawn(move || base.with_value("worker", worker))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (worker, context) in derived.iter().enumerate() {
        assert_eq!(context.value::<_, usize>(&"worker"), Some(&worker));
        assert_eq!(context.value::<_, &str>(&"region"), Some(&"eu"));
    }
    assert_eq!(shared.len(), 1);
}
