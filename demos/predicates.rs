//! Predicate Combinators Example
//!
//! This example demonstrates how loosely-typed predicates are composed into
//! a single filter over dynamic values.
//!
//! Run with: cargo run --example predicates

use anyfn::predicate::*;
use anyfn::{Func, Value};

fn main() {
    println!("=== Predicate Combinators Example ===\n");

    heterogeneous_predicates();
    equality();
    ordering();
    static_composition();
}

/// Callables over different concrete types, composed into one filter
fn heterogeneous_predicates() {
    println!("--- Heterogeneous Predicates ---\n");

    let non_negative = Func::unary(|i: i64| i >= 0);
    let below_ten = Func::unary(|i: i32| i < 10);
    let any_even = Func::unary(|v: Value| v.as_i64().is_some_and(|i| i % 2 == 0));

    let p = and([non_negative, below_ten, any_even]).unwrap();
    for x in [-2i64, 4, 7, 12] {
        println!("  even digit {}: {}", x, p.test(x).unwrap());
    }

    let q = or([
        Value::from(Func::unary(|s: String| s.starts_with('#'))),
        Value::from(equal_to("")),
    ])
    .unwrap();
    println!("\n  comment '#todo': {}", q.test("#todo").unwrap());
    println!("  comment '': {}", q.test("").unwrap());
    println!("  comment 'code': {}", q.test("code").unwrap());

    // Faults are reported when a callable has the wrong shape
    match and([Func::unary(|i: i64| i)]) {
        Ok(_) => println!("\n  unexpected success"),
        Err(e) => println!("\n  rejected: {}", e),
    }
    println!();
}

/// Shallow and deep equality
fn equality() {
    println!("--- Equality ---\n");

    let xs = Value::from(vec![1i64, 2]);
    let same = equal_to(xs.clone());
    let structural = deep_equal_to(xs.clone());

    println!("  equal_to(xs)(xs): {}", same.test(xs.clone()).unwrap());
    println!("  equal_to(xs)([1 2]): {}", same.test(vec![1i64, 2]).unwrap());
    println!("  deep_equal_to(xs)([1 2]): {}", structural.test(vec![1i64, 2]).unwrap());
    println!("  equal_to(1)(1u8): {}", equal_to(1i64).test(1u8).unwrap());
    println!("  is_nil(nil): {}", is_nil(&Value::nil()));
    println!();
}

/// Ordering filters
fn ordering() {
    println!("--- Ordering ---\n");

    let adult = greater_than_equal(18i64).unwrap();
    for age in [12u8, 18, 40] {
        println!("  adult {}: {}", age, adult.test(age).unwrap());
    }

    match less_than(true) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  less_than(true): {}", e),
    }
    println!();
}

/// Filters are predicates, so they also compose statically
fn static_composition() {
    println!("--- Static Composition ---\n");

    let teen = greater_than(12i64)
        .unwrap()
        .and(less_than(20i64).unwrap())
        .and(|v: &Value| !is_nil(v));

    for age in [Value::from(13i64), Value::from(25i64), Value::from("15")] {
        println!("  teen {:?}: {}", age, teen.check(&age));
    }
}
