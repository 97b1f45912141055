//! Integration tests for the adapters and predicate combinators

use std::sync::{Arc, Mutex};

use anyfn::adapt::{MapperTo, SupplierOf};
use anyfn::error::{
    map_to_shape, supplier_of_shape, CONSUMER_SHAPE, FILTER_SHAPE, MAP_SHAPE, SUPPLIER_SHAPE,
};
use anyfn::predicate::{and, filter_all, not, or};
use anyfn::{
    assert_adapted, assert_fault, assert_wrapped, consumer, filter, map, map_to, map_to_sample,
    supplier, supplier_of, supplier_of_sample, AdaptError, Consumer, Filter, Func, Mapper, Supplier,
    Type, Value,
};

fn any_less_than_3() -> Func {
    Func::unary(|v: Value| v.as_i64().is_some_and(|i| i < 3))
}

/// Callables that no single-argument, single-result adapter accepts.
fn malformed() -> Vec<Value> {
    vec![
        Value::from(0i64),
        Value::nil(),
        Value::nil_of(Type::func(vec![], vec![])).unwrap(),
        Value::from(Func::action(|| {})),
    ]
}

#[test]
fn filter_exact_and_inexact() {
    let exact = any_less_than_3();
    let p = filter(exact.clone()).unwrap();
    assert_adapted!(p, exact);
    assert!(p.test(1i64).unwrap());
    assert!(!p.test(5i64).unwrap());

    let loose = Func::unary(|i: i64| i < 3);
    let p = filter(loose.clone()).unwrap();
    assert_wrapped!(p, loose);
    assert!(p.test(1u8).unwrap());
    assert!(!p.test(5i64).unwrap());
}

#[test]
fn filter_all_mixes_exact_and_inexact() {
    let filters = filter_all([any_less_than_3(), Func::unary(|i: i64| i >= 0)]).unwrap();
    assert!(filters[0].test(1i64).unwrap());
    assert!(!filters[1].test(-1i8).unwrap());
}

#[test]
fn and_or_not() {
    let both = and([any_less_than_3(), Func::unary(|i: i64| i >= 0)]).unwrap();
    assert!(both.test(1i64).unwrap());
    assert!(!both.test(-1i64).unwrap());

    let either = or([any_less_than_3(), Func::unary(|i: i64| i % 2 == 0)]).unwrap();
    assert!(either.test(1i64).unwrap());
    assert!(!either.test(5i64).unwrap());

    let negated = not(any_less_than_3()).unwrap();
    assert!(!negated.test(1i64).unwrap());
    assert!(negated.test(5i64).unwrap());
}

#[test]
fn filter_shape_faults() {
    let expected = AdaptError::Shape(FILTER_SHAPE.to_string());
    for f in malformed() {
        assert_fault!(filter(f), expected.clone());
    }
    assert_fault!(filter(Func::sink(|_: i64| {})), expected.clone());
    assert_fault!(filter(Func::unary(|_: i64| 0i64)), expected.clone());
    assert_fault!(and([Value::from(any_less_than_3()), Value::nil()]), expected);
}

#[test]
fn map_exact_and_inexact() {
    let exact = Func::unary(|v: Value| Value::from(v.as_i64().unwrap_or_default() * 2));
    let m = map(exact.clone()).unwrap();
    assert_adapted!(m, exact);
    assert_eq!(m.apply(1i64).unwrap(), Value::from(2i64));

    let m = map(Func::unary(|i: i64| i * 2)).unwrap();
    assert_eq!(m.apply(2u8).unwrap(), Value::from(4i64));
    assert_eq!(m.apply(3i64).unwrap(), Value::from(6i64));
}

#[test]
fn map_shape_faults() {
    let expected = AdaptError::Shape(MAP_SHAPE.to_string());
    for f in malformed() {
        assert_fault!(map(f), expected.clone());
    }
    assert_fault!(map(Func::sink(|_: i64| {})), expected);
}

#[test]
fn map_to_exact_inexact_and_converting() {
    let exact = Func::unary(|v: Value| v.as_i64().unwrap_or_default() * 2);
    let m = map_to::<i64>(exact.clone()).unwrap();
    assert_adapted!(m, exact);
    assert_eq!(m.apply(1i64).unwrap(), 2);

    let m = map_to::<i64>(Func::unary(|i: i64| i * 2)).unwrap();
    assert_eq!(m.apply(2i64).unwrap(), 4);

    let m = map_to::<i64>(Func::unary(|i: i8| i * 2)).unwrap();
    assert_eq!(m.apply(2i64).unwrap(), 4);

    let parse = Func::unary(|s: String| s.parse::<i64>().unwrap_or_default());
    let m = map_to::<i64>(parse).unwrap();
    assert_eq!(m.apply("2").unwrap(), 2);
}

#[test]
fn map_to_sample_casts_back() {
    let func = map_to_sample(Func::unary(|i: i8| i * 2), &Value::from(0i64)).unwrap();
    let m = MapperTo::<i64>::try_from(func).unwrap();
    assert_eq!(m.apply(2i64).unwrap(), 4);
}

#[test]
fn map_to_faults() {
    assert_fault!(map_to_sample(Value::nil(), &Value::nil()), AdaptError::NilProbe);

    let nil_ptr = Value::nil_of(Type::pointer(Type::Int)).unwrap();
    assert_fault!(map_to_sample(nil_ptr.clone(), &nil_ptr), AdaptError::NilProbe);

    let expected = AdaptError::Shape(map_to_shape(&Type::Int));
    assert_fault!(map_to::<i64>(""), expected.clone());
    assert_fault!(map_to::<i64>(Func::action(|| {})), expected.clone());
    assert_fault!(
        map_to::<i64>(Func::unary(|s: String| s)),
        expected.clone()
    );
    assert_eq!(
        expected.to_string(),
        "fn must be a non-nil function of one argument of any type that returns one value convertible to type int"
    );
}

#[test]
fn supplier_exact_and_inexact() {
    let exact = Func::nullary(|| Value::from(2i64));
    let s = supplier(exact.clone()).unwrap();
    assert_adapted!(s, exact);
    assert_eq!(s.get().unwrap(), Value::from(2i64));

    let s = supplier(Func::nullary(|| 4i64)).unwrap();
    assert_eq!(s.get().unwrap(), Value::from(4i64));
}

#[test]
fn supplier_shape_faults() {
    let expected = AdaptError::Shape(SUPPLIER_SHAPE.to_string());
    assert_fault!(supplier(0i64), expected.clone());
    assert_fault!(supplier(Value::nil()), expected.clone());
    assert_fault!(
        supplier(Value::nil_of(Type::func(vec![], vec![Type::Int])).unwrap()),
        expected.clone()
    );
    assert_fault!(supplier(Func::sink(|_: i64| {})), expected.clone());
    assert_fault!(supplier(Func::action(|| {})), expected);
}

#[test]
fn supplier_of_exact_and_converting() {
    let exact = Func::nullary(|| 2i64);
    let s = supplier_of::<i64>(exact.clone()).unwrap();
    assert_adapted!(s, exact);
    assert_eq!(s.get().unwrap(), 2);

    let s = supplier_of::<i64>(Func::nullary(|| 4i8)).unwrap();
    assert_eq!(s.get().unwrap(), 4);

    let func = supplier_of_sample(Func::nullary(|| 4i8), &Value::from(0i64)).unwrap();
    assert_eq!(SupplierOf::<i64>::try_from(func).unwrap().get().unwrap(), 4);
}

#[test]
fn supplier_of_faults() {
    assert_fault!(supplier_of_sample(Value::nil(), &Value::nil()), AdaptError::NilProbe);

    let expected = AdaptError::Shape(supplier_of_shape(&Type::Int));
    assert_fault!(supplier_of::<i64>(""), expected.clone());
    assert_fault!(supplier_of::<i64>(Func::action(|| {})), expected.clone());
    assert_fault!(supplier_of::<i64>(Func::nullary(String::new)), expected);
}

#[test]
fn consumer_exact_and_inexact() {
    let seen = Arc::new(Mutex::new(Value::nil()));

    let slot = seen.clone();
    let exact = Func::sink(move |v: Value| *slot.lock().unwrap() = v);
    let c = consumer(exact.clone()).unwrap();
    assert_adapted!(c, exact);
    c.accept(2i64).unwrap();
    assert_eq!(*seen.lock().unwrap(), Value::from(2i64));

    let slot = seen.clone();
    let c = consumer(Func::sink(move |i: i64| *slot.lock().unwrap() = Value::from(i))).unwrap();
    c.accept(3u8).unwrap();
    assert_eq!(*seen.lock().unwrap(), Value::from(3i64));
    c.accept(4i64).unwrap();
    assert_eq!(*seen.lock().unwrap(), Value::from(4i64));
}

#[test]
fn consumer_shape_faults() {
    let expected = AdaptError::Shape(CONSUMER_SHAPE.to_string());
    for f in malformed() {
        assert_fault!(consumer(f), expected.clone());
    }
    assert_fault!(consumer(Func::nullary(|| 0i64)), expected);
}

#[test]
fn adapters_are_shareable_across_threads() {
    let p = filter(Func::unary(|i: i64| i % 2 == 0)).unwrap();
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let p = p.clone();
            std::thread::spawn(move || p.test(i).unwrap())
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn adapters_are_send_and_sync() {
    assert_send_sync::<Func>();
    assert_send_sync::<Value>();
    assert_send_sync::<Filter>();
    assert_send_sync::<Mapper>();
    assert_send_sync::<MapperTo<i64>>();
    assert_send_sync::<Supplier>();
    assert_send_sync::<SupplierOf<i64>>();
    assert_send_sync::<Consumer>();
}

#[test]
fn combined_filter_is_callable_from_scoped_threads() {
    let in_range = and([
        Func::unary(|i: i64| i >= 0),
        Func::unary(|i: u8| i < 100),
        Func::unary(|i: i32| i % 3 == 0),
    ])
    .unwrap();

    let results: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = [-3i64, 0, 4, 9, 99, 150]
            .into_iter()
            .map(|x| {
                let in_range = &in_range;
                s.spawn(move || in_range.test(x).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec![false, true, false, true, true, false]);
}
