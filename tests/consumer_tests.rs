//! Integration tests for the consumer family.
//!
//! Covers sequencing, conversions and the interaction between the two.

#![cfg(feature = "consumer")]

use fnlattice::{
    BiConsumer, Consumer, Context, Failure, MustBiConsumer, MustConsumer, PureBiConsumer,
    PureConsumer, PureMustBiConsumer,
};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const KEY: &str = "k";

fn read_counter(context: &Context) -> i32 {
    context.value::<_, i32>(&KEY).copied().unwrap_or(0)
}

fn increment_counter(context: &Context) -> Context {
    context.with_value(KEY, read_counter(context) + 1)
}

fn incrementing() -> Consumer<String> {
    Consumer::new(|context: Context, _: &String| (increment_counter(&context), Ok(())))
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn two_incrementing_consumers_leave_the_counter_at_two() {
    let initial = Context::new();
    assert!(!initial.contains_key(&KEY));

    let (context, result) = incrementing()
        .then(incrementing())
        .run(initial, &String::new());

    assert!(result.is_ok());
    assert_eq!(read_counter(&context), 2);
}

#[rstest]
fn then_runs_each_step_exactly_once_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let step = |name: &'static str| {
        let log = Arc::clone(&log);
        Consumer::<String>::new(move |context, input: &String| {
            log.lock().unwrap().push(format!("{name}:{input}"));
            (context, Ok(()))
        })
    };

    let (_, result) = step("a")
        .then(step("b"))
        .then(step("c"))
        .run(Context::new(), &String::from("x"));

    assert!(result.is_ok());
    assert_eq!(*log.lock().unwrap(), vec!["a:x", "b:x", "c:x"]);
}

#[rstest]
fn failure_skips_every_later_step() {
    let later_calls = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&later_calls);
    let probed: Consumer<String> = Consumer::new(move |context, _: &String| {
        probe.fetch_add(1, Ordering::SeqCst);
        (context, Ok(()))
    });
    let refuse: Consumer<String> =
        Consumer::new(|context, _: &String| (context, Err(Failure::new("refused"))));

    let (context, result) = incrementing()
        .then(refuse)
        .then(probed.clone())
        .then(probed)
        .run(Context::new(), &String::new());

    assert_eq!(result.unwrap_err().message(), "refused");
    assert_eq!(read_counter(&context), 1);
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn must_consumer_then_threads_context() {
    let bump = MustConsumer::<String>::new(|context, _: &String| increment_counter(&context));

    let context = bump.clone().then(bump).run(Context::new(), &String::new());

    assert_eq!(read_counter(&context), 2);
}

#[rstest]
fn pure_consumer_then_short_circuits() {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&calls);
    let refuse = PureConsumer::<i32>::new(|value| {
        if *value < 0 {
            Err(Failure::new("negative"))
        } else {
            Ok(())
        }
    });
    let count = PureConsumer::<i32>::new(move |_| {
        probe.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let composed = refuse.then(count);

    assert!(composed.run(&1).is_ok());
    assert_eq!(composed.run(&-1).unwrap_err().message(), "negative");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
#[case::succeeds(false)]
#[case::fails(true)]
fn pure_matches_running_on_an_empty_context(#[case] fails: bool) {
    let consumer: Consumer<String> = Consumer::new(move |context, _: &String| {
        let context = increment_counter(&context);
        if fails {
            (context, Err(Failure::new("failed")))
        } else {
            (context, Ok(()))
        }
    });

    let (_, direct) = consumer.run(Context::new(), &String::new());
    let pure = consumer.pure().run(&String::new());

    assert_eq!(
        direct.map_err(|failure| failure.to_string()),
        pure.map_err(|failure| failure.to_string())
    );
}

#[rstest]
fn must_returns_the_updated_context_on_success() {
    let seeded = Context::new().with_value(KEY, 5);

    let context = incrementing().must().run(seeded, &String::new());

    assert_eq!(read_counter(&context), 6);
}

#[rstest]
fn must_pure_equals_pure_must() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&log);
    let consumer: Consumer<i32> = Consumer::new(move |context: Context, value: &i32| {
        recorder.lock().unwrap().push((context.len(), *value));
        (context.with_value(KEY, *value), Ok(()))
    });

    consumer.clone().must().pure().run(&1);
    consumer.pure().must().run(&2);

    assert_eq!(*log.lock().unwrap(), vec![(0, 1), (0, 2)]);
}

// =============================================================================
// Two-input consumers
// =============================================================================

#[rstest]
fn bi_consumer_chain_through_every_variant() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let entry = |label: &'static str| {
        let log = Arc::clone(&log);
        move |left: &i32, right: &i32| log.lock().unwrap().push(format!("{label} {left}+{right}"))
    };

    let context_fallible = {
        let record = entry("ctx");
        BiConsumer::<i32, i32>::new(move |context, left: &i32, right: &i32| {
            record(left, right);
            (context, Ok(()))
        })
    };
    let pure_fallible = {
        let record = entry("pure");
        PureBiConsumer::<i32, i32>::new(move |left, right| {
            record(left, right);
            Ok(())
        })
    };
    let context_must = {
        let record = entry("must");
        MustBiConsumer::<i32, i32>::new(move |context, left: &i32, right: &i32| {
            record(left, right);
            context
        })
    };

    context_fallible
        .pure()
        .then(pure_fallible)
        .must()
        .then(PureMustBiConsumer::new(entry("plain")))
        .run(&1, &2);
    context_must.pure().run(&3, &4);

    assert_eq!(
        *log.lock().unwrap(),
        vec!["ctx 1+2", "pure 1+2", "plain 1+2", "must 3+4"]
    );
}
