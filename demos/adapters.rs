//! Adapters Example
//!
//! This example demonstrates adapting callables of arbitrary signatures into
//! mappers, suppliers and consumers with a uniform calling convention.
//!
//! Run with: cargo run --example adapters

use std::sync::{Arc, Mutex};

use anyfn::adapt::MapperTo;
use anyfn::collection::{index_of, value_of_key};
use anyfn::control::ternary_of;
use anyfn::{consumer, map, map_to, map_to_sample, supplier, supplier_of, Func, Value};

fn main() {
    println!("=== Adapters Example ===\n");

    mappers();
    suppliers_and_consumers();
    collections();
}

fn mappers() {
    println!("--- Mappers ---\n");

    // A pipeline of steps with different concrete signatures
    let steps = [
        map(Func::unary(|s: String| s.len())).unwrap(),
        map(Func::unary(|n: u64| n * 10)).unwrap(),
        map(Func::unary(|n: i32| format!("{} points", n))).unwrap(),
    ];
    let mut value = Value::from("abcd");
    for step in &steps {
        value = step.apply(value).unwrap();
        println!("  -> {:?}", value);
    }

    // Typed result, converted from the callable's own result type
    let half = map_to::<u8>(Func::unary(|i: i64| i / 2)).unwrap();
    println!("\n  map_to::<u8>(half)(300): {}", half.apply(300i64).unwrap());

    // Target chosen at run time, recovered with a checked cast
    let func = map_to_sample(Func::unary(|i: i64| i + 1), &Value::from(0i16)).unwrap();
    println!("  map_to_sample signature: {}", func.signature());
    let typed = MapperTo::<i16>::try_from(func).unwrap();
    println!("  typed(41): {}", typed.apply(41i64).unwrap());
    println!();
}

fn suppliers_and_consumers() {
    println!("--- Suppliers and Consumers ---\n");

    let answer = supplier(Func::nullary(|| 42u8)).unwrap();
    println!("  supplier: {:?}", answer.get().unwrap());

    let wide = supplier_of::<f64>(Func::nullary(|| 7i32)).unwrap();
    println!("  supplier_of::<f64>: {}", wide.get().unwrap());

    let picked = ternary_of(
        false,
        Func::nullary(|| "left".to_string()),
        Func::nullary(|| "right".to_string()),
    )
    .unwrap();
    println!("  ternary_of(false): {}", picked);

    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let record = consumer(Func::sink(move |n: i64| {
        if let Ok(mut log) = sink.lock() {
            log.push(n);
        }
    }))
    .unwrap();
    for x in [Value::from(1u8), Value::from(2i32), Value::from(3.7f64)] {
        record.accept(x).unwrap();
    }
    if let Err(e) = record.accept("four") {
        println!("  consumer rejected 'four': {}", e);
    }
    println!("  consumed: {:?}", log.lock().map(|l| l.clone()).unwrap_or_default());
    println!();
}

fn collections() {
    println!("--- Collections ---\n");

    let xs = Value::from(vec![10i64, 20]);
    println!("  index_of(xs, 1): {}", index_of(&xs, 1, None).unwrap());
    println!("  index_of(xs, 5): {}", index_of(&xs, 5, None).unwrap());
    println!(
        "  index_of(xs, 5, 99): {}",
        index_of(&xs, 5, Some(Value::from(99u8))).unwrap()
    );

    let ports = Value::map_of([("http".to_string(), 80u16), ("https".to_string(), 443)]);
    println!("  ports[https]: {}", value_of_key(&ports, "https", None).unwrap());
    println!("  ports[ftp]: {}", value_of_key(&ports, "ftp", None).unwrap());
}
