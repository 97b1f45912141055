//! Demonstrates tracing integration with adapters
//!
//! Run with: cargo run --example tracing_demo --features tracing

use anyfn::predicate::{and, not};
use anyfn::{filter, map, Func, Value};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Exact signature: used as is
    let exact = filter(Func::unary(|v: Value| !v.is_nil()));

    // Inexact signature: wrapped with argument conversion
    let loose = filter(Func::unary(|i: i64| i > 0));

    // Combinators adapt every element
    let combined = and([Func::unary(|i: i64| i > 0), Func::unary(|i: u8| i < 10)])
        .and_then(|p| not(p));

    // Rejected callables are logged at debug level
    let rejected = map(Func::action(|| {}));

    tracing::info!(
        exact = exact.is_ok(),
        loose = loose.is_ok(),
        combined = combined.is_ok(),
        rejected = rejected.is_err(),
        "Adaptation finished"
    );
}
