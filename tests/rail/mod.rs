//! Tests for the Rail container and its sync combinators.

use std::cell::Cell;

use result_rail::Rail;

#[test]
fn success_carries_no_errors() {
    let rail = Rail::success(42);
    assert!(rail.is_success());
    assert!(!rail.is_failure());
    assert!(rail.errors().is_empty());
    assert_eq!(rail.value(), Some(&42));
}

#[test]
fn failure_is_never_successful() {
    let rail = Rail::<i32>::failure("bad");
    assert!(rail.is_failure());
    assert!(!rail.is_success());
    assert_eq!(rail.value(), None);
    assert_eq!(rail.errors(), ["bad"]);
}

#[test]
fn failure_many_preserves_message_order() {
    let rail = Rail::<()>::failure_many(["first", "second", "third"]);
    assert_eq!(rail.errors(), ["first", "second", "third"]);
}

#[test]
#[should_panic(expected = "at least one error message")]
fn failure_many_rejects_empty_input() {
    let _ = Rail::<()>::failure_many(Vec::<String>::new());
}

#[test]
fn map_transforms_the_value() {
    let rail = Rail::success(5).map(|x| x * 2);
    assert_eq!(rail, Rail::success(10));
}

#[test]
fn bind_returns_the_continuation_rail_unwrapped() {
    let ok = Rail::success(7).bind(|x| Rail::success(x + 1));
    assert_eq!(ok, Rail::success(8));

    let bad = Rail::success(7).bind(|_| Rail::<i32>::failure("rejected"));
    assert_eq!(bad, Rail::failure("rejected"));
}

#[test]
fn then_preserves_the_original_value() {
    let seen = Cell::new(0);
    let original = String::from("payload");
    let rail = Rail::success(original.clone()).then(|v| {
        assert_eq!(*v, original);
        seen.set(seen.get() + 1);
    });
    assert_eq!(rail.into_value(), Some(original));
    assert_eq!(seen.get(), 1);
}

#[test]
fn combinators_short_circuit_on_failure() {
    let invocations = Cell::new(0);

    let rail = Rail::<i32>::failure("bad input")
        .map(|x| {
            invocations.set(invocations.get() + 1);
            x * 2
        })
        .bind(|x| {
            invocations.set(invocations.get() + 1);
            Rail::success(x)
        })
        .then(|_| invocations.set(invocations.get() + 1));

    assert_eq!(rail.errors(), ["bad input"]);
    assert_eq!(invocations.get(), 0);
}

#[test]
fn errors_survive_payload_type_changes_verbatim() {
    let rail = Rail::<i32>::failure_many(["a", "b", "c"]);

    let mapped: Rail<String> = rail.clone().map(|x| x.to_string());
    assert_eq!(mapped.errors(), ["a", "b", "c"]);

    let bound: Rail<Vec<u8>> = rail.bind(|_| Rail::success(Vec::new()));
    assert_eq!(bound.errors(), ["a", "b", "c"]);
}

#[test]
fn success_pipeline_scenario() {
    let logged = Cell::new(None);

    let rail = Rail::success(5)
        .map(|x| x * 2)
        .bind(|x| {
            if x > 5 {
                Rail::success(x)
            } else {
                Rail::failure("too small")
            }
        })
        .then(|x| logged.set(Some(*x)));

    assert_eq!(rail, Rail::success(10));
    assert_eq!(logged.get(), Some(10));
}

#[test]
fn bind_can_fail_mid_pipeline() {
    let rail = Rail::success(2)
        .map(|x| x * 2)
        .bind(|x| {
            if x > 5 {
                Rail::success(x)
            } else {
                Rail::failure("too small")
            }
        })
        .then(|_| panic!("effect must not run after the bind failed"));

    assert_eq!(rail.errors(), ["too small"]);
}

#[test]
fn into_result_round_trip() {
    assert_eq!(Rail::success(1).into_result(), Ok(1));

    let errors = Rail::<i32>::failure("oops").into_result().unwrap_err();
    assert_eq!(errors.as_slice(), ["oops"]);
}

#[test]
fn display_joins_messages() {
    assert_eq!(Rail::success(42).to_string(), "42");
    assert_eq!(
        Rail::<i32>::failure_many(["first", "second"]).to_string(),
        "first; second"
    );
}

#[test]
fn collect_gathers_all_successes() {
    let rail: Rail<Vec<i32>> = (1..=3).map(Rail::success).collect();
    assert_eq!(rail, Rail::success(vec![1, 2, 3]));
}

#[test]
fn collect_stops_at_the_first_failure() {
    let consumed = Cell::new(0);
    let rails = (1..=5).map(|x| {
        consumed.set(consumed.get() + 1);
        if x == 3 {
            Rail::failure("three is out")
        } else {
            Rail::success(x)
        }
    });

    let rail: Rail<Vec<i32>> = rails.collect();
    assert_eq!(rail.errors(), ["three is out"]);
    assert_eq!(consumed.get(), 3); // elements after the failure never consumed
}

#[test]
fn iteration_yields_at_most_one_value() {
    let rail = Rail::success(9);
    assert_eq!(rail.iter().copied().collect::<Vec<_>>(), vec![9]);
    assert_eq!(rail.into_iter().collect::<Vec<_>>(), vec![9]);

    let rail = Rail::<i32>::failure("no");
    assert_eq!(rail.iter().count(), 0);
    assert_eq!(rail.into_iter().count(), 0);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use result_rail::Rail;

    #[test]
    fn rail_round_trips_through_json() {
        let ok = Rail::success(42);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(serde_json::from_str::<Rail<i32>>(&json).unwrap(), ok);

        let bad = Rail::<i32>::failure_many(["a", "b"]);
        let json = serde_json::to_string(&bad).unwrap();
        assert_eq!(serde_json::from_str::<Rail<i32>>(&json).unwrap(), bad);
    }
}
