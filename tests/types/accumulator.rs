use error_or::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
struct Signup {
    name: String,
    age: u8,
}

fn validate(name: &str, age: i64) -> ErrorOr<Signup> {
    let mut errors = ErrorAccumulator::new();
    errors.check(!name.is_empty(), || Error::validation().with_code("Name.Empty"));
    errors.check((0..=130).contains(&age), || {
        Error::validation().with_code("Age.OutOfRange").with_meta("age", age)
    });

    errors.finish_with(|| Signup { name: name.to_string(), age: age as u8 })
}

#[test]
fn accumulator_new_is_empty() {
    let acc = ErrorAccumulator::new();
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
    assert_eq!(acc, ErrorAccumulator::default());
}

#[test]
fn empty_accumulator_finishes_as_success() {
    let result = validate("ada", 36);
    assert_eq!(result.value(), Signup { name: "ada".into(), age: 36 });
}

#[test]
fn accumulator_keeps_every_error_in_order() {
    let result = validate("", 200);

    let codes: Vec<&str> = result.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["Name.Empty", "Age.OutOfRange"]);
    assert_eq!(result.errors()[1].meta("age"), Some(&MetadataValue::Int(200)));
}

#[test]
fn check_returns_condition_and_builds_error_lazily() {
    let mut acc = ErrorAccumulator::new();
    let mut built = 0;

    assert!(acc.check(true, || {
        built += 1;
        Error::failure()
    }));
    assert!(!acc.check(false, || {
        built += 1;
        Error::failure()
    }));

    assert_eq!(built, 1);
    assert_eq!(acc.len(), 1);
}

#[test]
fn absorb_collects_failures_and_returns_values() {
    let mut acc = ErrorAccumulator::new();

    let a = acc.absorb(ErrorOr::from_value(1));
    let b = acc.absorb(ErrorOr::<i32>::from_errors([Error::conflict(), Error::not_found()]));

    assert_eq!(a, Some(1));
    assert_eq!(b, None);
    assert_eq!(acc.len(), 2);
    assert_eq!(acc.iter().next(), Some(&Error::conflict()));
}

#[test]
fn accumulator_extend_collect_and_iterate() {
    let mut acc: ErrorAccumulator = [Error::failure()].into_iter().collect();
    acc.extend([Error::unexpected(), Error::conflict()]);
    acc.push(Error::unauthorized());

    let kinds: Vec<ErrorKind> = (&acc).into_iter().map(Error::kind).collect();
    assert_eq!(
        kinds,
        [ErrorKind::Failure, ErrorKind::Unexpected, ErrorKind::Conflict, ErrorKind::Unauthorized]
    );

    let owned: Vec<Error> = acc.clone().into_iter().collect();
    assert_eq!(owned.len(), 4);
    assert_eq!(acc.into_inner().len(), 4);
}

#[test]
fn finish_with_value_on_failure_does_not_build_value() {
    let mut acc = ErrorAccumulator::new();
    acc.push(Error::failure());

    let mut built = false;
    let result = acc.finish_with(|| {
        built = true;
        5
    });

    assert!(result.is_error());
    assert!(!built);
}
