// File: crates/playground-chart/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests (datasets, click recorder).
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use playground_chart::{ClickEvent, ClickFuture, ClickPayload, Dataset, Record};

pub fn record(date: &str, temperature: f64) -> Record {
    Record::new().with("date", date).with("temperature", temperature)
}

/// Two points two weeks apart; the second is the one clicked in most tests.
pub fn january() -> Dataset {
    vec![record("2024-01-01", 10.0), record("2024-01-15", 42.0)].into()
}

/// `n` consecutive days with a smooth temperature curve.
pub fn daily(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64);
            let t = 50.0 + 20.0 * (i as f64 * 0.3).sin();
            record(&day.format("%Y-%m-%d").to_string(), (t * 10.0).round() / 10.0)
        })
        .collect()
}

/// A click trigger that records every payload it receives.
pub fn click_recorder() -> (Rc<RefCell<Vec<Record>>>, impl Fn(ClickEvent, ClickPayload) -> ClickFuture) {
    let seen: Rc<RefCell<Vec<Record>>> = Rc::default();
    let sink = seen.clone();
    let trigger = move |_event: ClickEvent, payload: ClickPayload| -> ClickFuture {
        let sink = sink.clone();
        async move {
            sink.borrow_mut().push(payload.record);
            true
        }
        .boxed_local()
    };
    (seen, trigger)
}
