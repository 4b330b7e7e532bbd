use std::cell::Cell;
use std::sync::atomic::{AtomicU32, Ordering};

use error_or::prelude::*;

fn parse(input: &str) -> ErrorOr<i32> {
    input.parse::<i32>().or_error(|_| Error::validation().with_code("Input.NotANumber"))
}

#[test]
fn parse_double_to_string_chain_succeeds() {
    let result = parse("5").map(|n| n * 2).map(|n| n.to_string());

    assert!(result.is_value());
    assert_eq!(result.value(), "10");
}

#[test]
fn lifted_input_runs_through_chain() {
    let result = "5".lift().and_then(parse).map(|n| n * 2).map(|n| n.to_string());
    assert_eq!(result, ErrorOr::from_value(String::from("10")));

    let failed = "x".lift().and_then(parse).map(|n| n * 2).map(|n| n.to_string());
    assert_eq!(failed.errors().len(), 1);
    assert_eq!(failed.fallback(String::from("oh no")).value(), "oh no");
}

#[test]
fn failing_chain_recovers_with_replacement() {
    let calls = AtomicU32::new(0);

    let result = parse("x")
        .map(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n * 2
        })
        .map(|n| n.to_string())
        .recover_safe(|_| String::from("oh no"));

    assert_eq!(result.value(), "oh no");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failure_short_circuits_later_steps() {
    let step1 = AtomicU32::new(0);
    let step2 = AtomicU32::new(0);
    let step4 = AtomicU32::new(0);

    let result = ErrorOr::from_value(1)
        .and_then(|n| {
            step1.fetch_add(1, Ordering::SeqCst);
            ErrorOr::from_value(n + 1)
        })
        .and_then(|n| {
            step2.fetch_add(1, Ordering::SeqCst);
            ErrorOr::from_value(n + 1)
        })
        .and_then(|_| Error::conflict().with_code("Step.Three").into_failure::<i32>())
        .and_then(|n| {
            step4.fetch_add(1, Ordering::SeqCst);
            ErrorOr::from_value(n + 1)
        });

    assert_eq!(step1.load(Ordering::SeqCst), 1);
    assert_eq!(step2.load(Ordering::SeqCst), 1);
    assert_eq!(step4.load(Ordering::SeqCst), 0);
    assert_eq!(result.first_error().code(), "Step.Three");
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn map_preserves_error_list_unchanged() {
    let errors = [Error::validation().with_code("A"), Error::not_found().with_code("B")];
    let result = ErrorOr::<i32>::from_errors(errors.clone()).map(|n| n.to_string());

    assert_eq!(result.errors(), &errors);
}

#[test]
fn and_then_propagates_callback_failure() {
    let result = ErrorOr::from_value(0)
        .and_then(|n| if n == 0 { Error::failure().into_failure() } else { ErrorOr::from_value(10 / n) });

    assert_eq!(result.first_error(), &Error::failure());
}

#[test]
fn inspect_runs_only_on_success_and_passes_through() {
    let seen = Cell::new(0);

    let ok = ErrorOr::from_value(7).inspect(|v| seen.set(*v));
    assert_eq!(seen.get(), 7);
    assert_eq!(ok, ErrorOr::from_value(7));

    seen.set(0);
    let failed = ErrorOr::<i32>::from_error(Error::conflict()).inspect(|v| seen.set(*v));
    assert_eq!(seen.get(), 0);
    assert_eq!(failed.first_error(), &Error::conflict());
}

#[test]
fn branch_runs_exactly_one_callback() {
    let on_value = AtomicU32::new(0);
    let on_error = AtomicU32::new(0);

    ErrorOr::from_value(1).branch(
        |_| {
            on_value.fetch_add(1, Ordering::SeqCst);
        },
        |_| {
            on_error.fetch_add(1, Ordering::SeqCst);
        },
    );
    assert_eq!((on_value.load(Ordering::SeqCst), on_error.load(Ordering::SeqCst)), (1, 0));

    ErrorOr::<i32>::from_errors([Error::failure(), Error::conflict()]).branch(
        |_| {
            on_value.fetch_add(1, Ordering::SeqCst);
        },
        |errors| {
            assert_eq!(errors.len(), 2);
            on_error.fetch_add(1, Ordering::SeqCst);
        },
    );
    assert_eq!((on_value.load(Ordering::SeqCst), on_error.load(Ordering::SeqCst)), (1, 1));
}

#[test]
fn branch_first_receives_primary_error() {
    let seen = Cell::new(None);

    ErrorOr::<()>::from_errors([Error::not_found(), Error::conflict()])
        .branch_first(|_| {}, |error| seen.set(Some(error.kind())));

    assert_eq!(seen.get(), Some(ErrorKind::NotFound));
}

#[test]
fn fold_returns_selected_callback_result() {
    let describe = |result: ErrorOr<i32>| {
        result.fold(|n| format!("value {}", n), |errors| format!("{} errors", errors.len()))
    };

    assert_eq!(describe(ErrorOr::from_value(3)), "value 3");
    assert_eq!(describe(ErrorOr::from_errors([Error::failure(), Error::failure()])), "2 errors");
}

#[test]
fn fold_first_uses_first_error() {
    let code = ErrorOr::<i32>::from_errors([Error::unauthorized(), Error::failure()])
        .fold_first(|_| String::new(), |error| error.code().to_string());

    assert_eq!(code, "General.Unauthorized");
}

#[test]
fn recover_may_fail_again() {
    let recovered = ErrorOr::<i32>::from_error(Error::not_found()).recover(|errors| {
        assert_eq!(errors[0].kind(), ErrorKind::NotFound);
        Error::unexpected().into_failure()
    });

    assert_eq!(recovered.first_error(), &Error::unexpected());
}

#[test]
fn recover_skipped_on_success() {
    let calls = Cell::new(0);
    let result = ErrorOr::from_value(1).recover(|_| {
        calls.set(calls.get() + 1);
        ErrorOr::from_value(2)
    });

    assert_eq!(result.value(), 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn fallback_only_applies_to_failure() {
    assert_eq!(ErrorOr::from_value(1).fallback(9).value(), 1);
    assert_eq!(ErrorOr::<i32>::from_error(Error::failure()).fallback(9).value(), 9);
}

#[test]
fn replace_error_variants() {
    let failed = || ErrorOr::<i32>::from_errors([Error::validation(), Error::conflict()]);

    let single = failed().replace_error(Error::failure().with_code("Replaced"));
    assert_eq!(single.errors().len(), 1);
    assert_eq!(single.first_error().code(), "Replaced");

    let computed = failed().replace_error_with(|errors| {
        Error::failure().with_meta("count", errors.len() as i64)
    });
    assert_eq!(computed.first_error().meta("count"), Some(&MetadataValue::Int(2)));

    let reversed = failed().replace_errors_with(|errors| errors.into_iter().rev());
    assert_eq!(reversed.errors(), &[Error::conflict(), Error::validation()]);

    assert_eq!(ErrorOr::from_value(4).replace_error(Error::failure()).value(), 4);
}

#[test]
#[should_panic(expected = "empty error list")]
fn replace_errors_with_rejects_empty_list() {
    let _ = ErrorOr::<i32>::from_error(Error::failure()).replace_errors_with(|_| Vec::new());
}

#[test]
fn flatten_collapses_nested_containers() {
    let nested = ErrorOr::from_value(ErrorOr::from_value(5));
    assert_eq!(nested.flatten(), ErrorOr::from_value(5));

    let inner_failure = ErrorOr::from_value(ErrorOr::<i32>::from_error(Error::conflict()));
    assert_eq!(inner_failure.flatten().first_error(), &Error::conflict());

    let outer_failure = ErrorOr::<ErrorOr<i32>>::from_error(Error::not_found());
    assert_eq!(outer_failure.flatten().first_error(), &Error::not_found());
}
