//! Integration tests for equality, nil checks, collection accessors and
//! control-flow helpers

use anyfn::collection::{index_of, value_of_key};
use anyfn::control::{
    panic_on_error, panic_on_error2, panic_on_false, panic_on_false2, ternary, ternary_of,
    OrAbort,
};
use anyfn::predicate::{
    convert_to, deep_equal_to, equal_to, greater_than, is_less_than, is_nil, less_than_equal,
    Predicate, PredicateExt,
};
use anyfn::testing::{catch_abort, CallCounter};
use anyfn::{assert_fault, AdaptError, Func, Type, Value};

#[test]
fn equal_to_nil() {
    let eq = equal_to(Value::nil());
    let deep = deep_equal_to(Value::nil());
    assert!(eq.test(Value::nil()).unwrap());
    assert!(deep.test(Value::nil()).unwrap());
    assert!(!eq.test(0i64).unwrap());
    assert!(!deep.test(0i64).unwrap());
}

#[test]
fn equal_to_typed_nil_slice() {
    let nil_ints = Value::nil_of(Type::slice(Type::Int)).unwrap();
    let nil_strings = Value::nil_of(Type::slice(Type::String)).unwrap();
    let eq = equal_to(nil_ints.clone());
    let deep = deep_equal_to(nil_ints.clone());

    assert!(eq.test(nil_ints.clone()).unwrap());
    assert!(deep.test(nil_ints).unwrap());
    assert!(!eq.test(Value::nil()).unwrap());
    assert!(!deep.test(Value::nil()).unwrap());
    assert!(!eq.test(nil_strings.clone()).unwrap());
    assert!(!deep.test(nil_strings).unwrap());
}

#[test]
fn equal_to_slices() {
    let the_val = Value::from(vec![1i64, 2]);
    let eq = equal_to(the_val.clone());
    let deep = deep_equal_to(vec![1i64, 2]);
    let nil_ints = Value::nil_of(Type::slice(Type::Int)).unwrap();

    assert!(!eq.test(nil_ints.clone()).unwrap());
    assert!(!deep.test(nil_ints).unwrap());
    assert!(!eq.test(Value::nil()).unwrap());
    assert!(!deep.test(Value::nil()).unwrap());
    assert!(!eq.test(vec![1i64]).unwrap());
    assert!(!deep.test(vec![1i64]).unwrap());
    assert!(!eq.test(vec![1i64, 2]).unwrap());
    assert!(deep.test(vec![1i64, 2]).unwrap());
    assert!(eq.test(the_val.clone()).unwrap());
    assert!(deep.test(the_val).unwrap());
}

#[test]
fn equal_to_converts_argument() {
    let eq = equal_to(1i64);
    let deep = deep_equal_to(1i64);
    assert!(eq.test(1i8).unwrap());
    assert!(deep.test(1i8).unwrap());
    assert!(!eq.test(5i64).unwrap());
    assert!(!deep.test(5i64).unwrap());
}

#[test]
fn is_nil_values() {
    assert!(is_nil(&Value::nil()));
    assert!(is_nil(&Value::nil_of(Type::slice(Type::Int)).unwrap()));
    assert!(is_nil(&Value::nil_of(Type::func(vec![], vec![])).unwrap()));
    assert!(!is_nil(&Value::from("")));
}

#[test]
fn convert_to_sample_type() {
    let to_i8 = convert_to(&Value::from(0i8)).unwrap();
    assert_eq!(to_i8.apply(1i64).unwrap(), Value::from(1i8));
}

#[test]
fn ordering_filters_compose_statically() {
    let in_range = greater_than(0i64)
        .unwrap()
        .and(less_than_equal(10i64).unwrap());
    assert!(in_range.check(&Value::from(10u8)));
    assert!(!in_range.check(&Value::from(0u8)));
    assert!(!in_range.check(&Value::from("5")));
    assert!(is_less_than(&Value::from("abc"), &Value::from("abd")).unwrap());
}

#[test]
fn index_of_slices_and_arrays() {
    for seq in [Value::from(vec![1i64]), Value::from([1i64])] {
        assert_eq!(index_of(&seq, 0, None).unwrap(), Value::from(1i64));
        assert_eq!(index_of(&seq, 1, Some(Value::from(2i64))).unwrap(), Value::from(2i64));
        assert_eq!(index_of(&seq, 1, None).unwrap(), Value::from(0i64));
    }

    assert_fault!(index_of(&Value::nil(), 0, None), AdaptError::NotIndexable);
    assert_fault!(index_of(&Value::from(5i64), 0, None), AdaptError::NotIndexable);
    assert_eq!(
        AdaptError::NotIndexable.to_string(),
        "IndexOf requires an array or slice"
    );
}

#[test]
fn value_of_key_maps() {
    let m = Value::map_of([("1".to_string(), 1i64)]);
    assert_eq!(value_of_key(&m, "1", None).unwrap(), Value::from(1i64));
    assert_eq!(value_of_key(&m, "", Some(Value::from(2i64))).unwrap(), Value::from(2i64));
    assert_eq!(value_of_key(&m, "", None).unwrap(), Value::from(0i64));

    assert_fault!(value_of_key(&Value::nil(), 0i64, None), AdaptError::NotKeyed);
    assert_fault!(value_of_key(&Value::from(5i64), 0i64, None), AdaptError::NotKeyed);
}

#[test]
fn ternary_helpers() {
    assert_eq!(ternary(true, 1, 2), 1);
    assert_eq!(ternary(false, 1, 2), 2);

    let one = ternary_of(
        true,
        Func::nullary(|| Value::from(1i64)),
        Func::nullary(|| Value::from(2i64)),
    )
    .unwrap();
    assert_eq!(one, Value::from(1i64));

    let two = ternary_of(false, Func::nullary(|| 1i64), Func::nullary(|| 2i64)).unwrap();
    assert_eq!(two, Value::from(2i64));
}

#[test]
fn ternary_of_runs_only_the_selected_supplier() {
    let a = CallCounter::new();
    let b = CallCounter::new();
    ternary_of(true, a.supplier(1i64), b.supplier(2i64)).unwrap();
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 0);
}

#[test]
fn panic_on_error_carries_the_error() {
    let parsed: Result<i64, _> = "1".parse::<i64>();
    assert_eq!(panic_on_error2(parsed), 1);
    panic_on_error::<std::num::ParseIntError>(Ok(()));

    let payload = catch_abort::<std::num::ParseIntError>(|| {
        panic_on_error2("a".parse::<i64>());
    });
    assert_eq!(
        payload.map(|e| e.to_string()).as_deref(),
        Some("invalid digit found in string")
    );

    let payload = catch_abort::<std::num::ParseIntError>(|| {
        panic_on_error("".parse::<i64>().map(drop));
    });
    assert_eq!(
        payload.map(|e| e.to_string()).as_deref(),
        Some("cannot parse integer from empty string")
    );
}

#[test]
fn panic_on_false_carries_the_message() {
    let m = [("k", 1)];
    let found = m.iter().find(|(k, _)| *k == "k").map(|(_, v)| *v);
    assert_eq!(panic_on_false2(found, found.is_some(), "missing k"), Some(1));

    assert_eq!(
        catch_abort::<String>(|| panic_on_false(false, "nope")).as_deref(),
        Some("nope")
    );
}

#[test]
fn or_abort_unwraps_success() {
    let positive = anyfn::filter(Func::unary(|i: i64| i > 0)).or_abort();
    assert!(positive.test(2i64).or_abort());
}
