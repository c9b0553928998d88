// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Behavioural tests for `okerr::Result` through its public API.

use std::cell::Cell;
use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use tracing_subscriber::util::SubscriberInitExt;

use okerr::{Err, FnFactory, Ok, OptionLike, Result, ResultError, TypeFactory};

/// A stand-in for a caller-owned optional type.
#[derive(Debug, PartialEq)]
enum Maybe<T> {
    Some(T),
    None,
}

impl<T> OptionLike for Maybe<T> {
    type Item = T;

    fn none() -> Self {
        Maybe::None
    }

    fn some(item: T) -> Self {
        Maybe::Some(item)
    }

    fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }
}

const VALUES: [i64; 6] = [0, 1, -1, 42, i64::MIN, i64::MAX];
const ERRORS: [&str; 4] = ["", "error", "disk full", "ünïcödé"];

#[test]
fn variant_queries_hold_for_all_samples() {
    for v in VALUES {
        let ok: Result<i64, &str> = Ok(v);
        assert!(ok.is_ok());
        assert!(!ok.is_err());
    }
    for e in ERRORS {
        let err: Result<i64, &str> = Err(e);
        assert!(err.is_err());
        assert!(!err.is_ok());
    }
}

#[test]
fn map_applies_only_to_ok() {
    let f = |x: i64| x.wrapping_mul(3);
    for v in VALUES {
        let ok: Result<i64, &str> = Ok(v);
        assert_eq!(ok.map(f).unwrap(), f(v));
    }

    let calls = Cell::new(0);
    for e in ERRORS {
        let err: Result<i64, &str> = Err(e);
        let mapped = err.map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(mapped.unwrap_err(), e);
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_err_applies_only_to_err() {
    let err: Result<i32, &str> = Err("error");
    assert_eq!(err.map_err(|e| format!("new {}", e)).unwrap_err(), "new error");

    let ok: Result<i32, &str> = Ok(42);
    assert_eq!(ok.map_err(|_| -> String { unreachable!() }), Ok(42));
}

#[test]
fn map_scenario() {
    let ok: Result<i32, &str> = Ok(42);
    assert_eq!(ok.map(|x| x * 2).unwrap(), 84);
}

#[test]
fn defaults() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    assert_eq!(ok.unwrap_or(10), 42);
    assert_eq!(err.unwrap_or(10), 10);
    assert_eq!(ok.unwrap_or_else(|_| 0), 42);
    assert_eq!(err.unwrap_or_else(|e| e.len() as i32), 5);
    assert_eq!(err.unwrap_or_default(), 0);

    assert_eq!(ok.map_or(0, |x| x + 1), 43);
    assert_eq!(err.map_or(0, |x| x + 1), 0);
    assert_eq!(ok.map_or_else(|e| e.len() as i32, |x| x + 1), 43);
    assert_eq!(err.map_or_else(|e| e.len() as i32, |x| x + 1), 5);
}

#[test]
fn expect_returns_the_matching_payload() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");
    assert_eq!(ok.expect("Should not throw"), 42);
    assert_eq!(err.expect_err("Should not throw"), "error");
    assert_eq!(ok.into_ok(), 42);
    assert_eq!(err.into_err(), "error");
}

#[test]
fn wrong_variant_extraction_panics() {
    let err: Result<i32, &str> = Err("error");
    let ok: Result<i32, &str> = Ok(42);

    assert!(panic::catch_unwind(|| err.unwrap()).is_err());
    assert!(panic::catch_unwind(|| err.expect("Custom message")).is_err());
    assert!(panic::catch_unwind(|| ok.unwrap_err()).is_err());
    assert!(panic::catch_unwind(|| ok.expect_err("nope")).is_err());
    assert!(panic::catch_unwind(|| ok.into_err()).is_err());
    assert!(panic::catch_unwind(|| err.into_ok()).is_err());
}

#[test]
fn expect_panic_message_names_caller_text_and_error() {
    let err: Result<i32, &str> = Err("error");
    let payload = panic::catch_unwind(|| err.expect("Custom message")).unwrap_err();
    let message = payload.downcast_ref::<String>().expect("formatted panic message");
    assert_eq!(message, "Custom message: error");
}

/// Log sink shared between a test and the subscriber it installs.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Result::Ok(())
    }
}

/// Run `f` with a subscriber recording into a buffer on this thread, and
/// return what it produced along with everything that was logged.
fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let capture = LogCapture::default();
    let sink = capture.clone();
    let guard = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish()
        .set_default();
    let out = f();
    drop(guard);
    let logs = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
    (out, logs)
}

#[test]
fn violation_is_logged_and_still_panics() {
    let err: Result<i32, &str> = Err("boom");
    let (payload, logs) = with_captured_logs(|| panic::catch_unwind(|| err.unwrap()));

    let payload = payload.unwrap_err();
    let message = payload.downcast_ref::<String>().expect("formatted panic message");
    assert_eq!(message, "called unwrap on an Err value: \"boom\"");

    if cfg!(feature = "no_violation_logging") {
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    } else {
        assert!(logs.contains("ERROR"), "missing level in: {}", logs);
        assert!(logs.contains("UnwrapOnErr"), "missing kind in: {}", logs);
        assert!(
            logs.contains("called unwrap on an Err value"),
            "missing message in: {}",
            logs
        );
    }
}

#[test]
fn construction_failure_is_logged() {
    type Built = core::result::Result<Option<i32>, &'static str>;
    let failing = FnFactory::new(
        || -> Built { core::result::Result::Err("no absent constructor") },
        |v: i32| -> Built { core::result::Result::Ok(Some(v)) },
    );
    let err: Result<i32, &str> = Err("error");
    let (built, logs) = with_captured_logs(|| err.ok_with(&failing));

    assert_eq!(built.unwrap_err().kind(), "Construction");
    assert!(logs.contains("WARN"), "missing level in: {}", logs);
    assert!(logs.contains("Construction"), "missing kind in: {}", logs);
    assert!(logs.contains("no absent constructor"), "missing reason in: {}", logs);
}

#[test]
fn successful_operations_do_not_log() {
    let ok: Result<i32, &str> = Ok(42);
    let factory = TypeFactory::<Option<i32>>::new();
    let ((doubled, built), logs) =
        with_captured_logs(|| (ok.map(|x| x * 2).unwrap(), ok.ok_with(&factory)));

    assert_eq!(doubled, 84);
    assert_eq!(built, core::result::Result::Ok(Some(42)));
    assert_eq!(logs, "");
}

#[test]
fn try_twins_agree_with_panicking_forms() {
    let err: Result<i32, &str> = Err("boom");
    match err.try_unwrap() {
        core::result::Result::Err(e) => {
            assert_eq!(e.kind(), "UnwrapOnErr");
            assert_eq!(e.to_string(), "called unwrap on an Err value: \"boom\"");
        }
        core::result::Result::Ok(_) => panic!("Err unwrapped"),
    }
}

#[test]
fn and_or_short_circuit() {
    let a: Result<i32, &str> = Ok(1);
    let e: Result<i32, &str> = Err("e");
    let r: Result<&str, &str> = Ok("r");
    let f: Result<&str, &str> = Err("f");

    assert_eq!(a.and(r), r);
    assert_eq!(a.and(f), f);
    assert_eq!(e.and(r), Err("e"));

    let other: Result<i32, u8> = Ok(2);
    assert_eq!(a.or(other), Ok(1));
    assert_eq!(e.or(other), other);
    assert_eq!(e.or(Err::<i32, u8>(9)), Err(9));
}

#[test]
fn and_then_or_else_chain() {
    let double = |x: i32| -> Result<i32, &str> { Ok(x * 2) };
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    assert_eq!(ok.and_then(double).unwrap(), 84);
    assert_eq!(err.and_then(double), err);

    let recover = |e: &str| -> Result<i32, ()> { Ok(e.len() as i32) };
    assert_eq!(ok.or_else(recover), Ok(42));
    assert_eq!(err.or_else(recover).unwrap(), 5);
}

#[test]
fn match_with_dispatches_by_variant() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("e");
    let on_ok = |v: i32| format!("ok {}", v);
    let on_err = |e: &str| format!("err {}", e);

    assert_eq!(ok.match_with(on_ok, on_err), "ok 42");
    assert_eq!(err.match_with(on_ok, on_err), "err e");
}

#[test]
fn inspect_returns_original_result() {
    let seen = Cell::new(0);
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    assert_eq!(ok.inspect(|v| seen.set(*v)), ok);
    assert_eq!(seen.get(), 42);
    assert_eq!(err.inspect(|_| seen.set(-1)), err);
    assert_eq!(seen.get(), 42);

    let errors = Cell::new(0);
    assert_eq!(ok.inspect_err(|_| errors.set(errors.get() + 1)), ok);
    assert_eq!(err.inspect_err(|_| errors.set(errors.get() + 1)), err);
    assert_eq!(errors.get(), 1);
}

#[test]
fn flatten_removes_one_level() {
    let nested: Result<Result<i32, &str>, &str> = Ok(Ok(42));
    assert_eq!(nested.flatten().unwrap(), 42);

    let outer_err: Result<Result<i32, &str>, &str> = Err("error");
    assert_eq!(outer_err.flatten(), Err("error"));

    let twice: Result<Result<Result<i32, &str>, &str>, &str> = Ok(Ok(Ok(1)));
    assert_eq!(twice.flatten().flatten(), Ok(1));
}

#[test]
fn iteration_is_restartable() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![42]);
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![42]);
    assert_eq!(err.iter().count(), 0);
    assert_eq!(err.iter().count(), 0);

    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![42]);
    assert_eq!(err.into_iter().next(), None);
}

#[test]
fn flat_iteration_walks_collections() {
    let ok: Result<Vec<&str>, i32> = Ok(vec!["a", "b"]);
    assert_eq!(ok.iter_flat().copied().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(ok.iter_flat().count(), 2);

    let err: Result<Vec<&str>, i32> = Err(1);
    assert_eq!(err.iter_flat().count(), 0);
}

#[test]
fn ok_and_err_build_option_like_values() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    assert_eq!(ok.ok::<Maybe<_>>(), Maybe::Some(42));
    assert_eq!(err.ok::<Maybe<_>>(), Maybe::None);
    assert_eq!(ok.err::<Maybe<_>>(), Maybe::None);
    assert_eq!(err.err::<Maybe<_>>(), Maybe::Some("error"));

    assert_eq!(ok.ok::<Option<_>>(), Some(42));
    assert_eq!(err.err::<Option<_>>(), Some("error"));
}

#[test]
fn transpose_swaps_layers() {
    let some: Result<Maybe<i32>, &str> = Ok(Maybe::Some(42));
    let none: Result<Maybe<i32>, &str> = Ok(Maybe::None);
    let err: Result<Maybe<i32>, &str> = Err("error");

    match some.transpose::<Maybe<_>>() {
        Maybe::Some(inner) => assert_eq!(inner.unwrap(), 42),
        Maybe::None => panic!("expected present case"),
    }
    assert_eq!(none.transpose::<Maybe<_>>(), Maybe::None);
    match err.transpose::<Maybe<_>>() {
        Maybe::Some(inner) => assert_eq!(inner.unwrap_err(), "error"),
        Maybe::None => panic!("expected present case"),
    }
}

#[test]
fn factories_build_or_report_construction_failure() {
    let ok: Result<i32, &str> = Ok(42);
    let err: Result<i32, &str> = Err("error");

    let typed = TypeFactory::<Maybe<i32>>::new();
    assert_eq!(ok.ok_with(&typed), core::result::Result::Ok(Maybe::Some(42)));
    assert_eq!(err.ok_with(&typed), core::result::Result::Ok(Maybe::None));

    let broken = FnFactory::new(
        || -> core::result::Result<Maybe<&'static str>, &'static str> {
            core::result::Result::Err("no absent constructor")
        },
        |e: &'static str| -> core::result::Result<Maybe<&'static str>, &'static str> {
            core::result::Result::Ok(Maybe::Some(e))
        },
    );
    assert_eq!(
        err.err_with(&broken),
        core::result::Result::Ok(Maybe::Some("error"))
    );
    assert_eq!(
        ok.err_with(&broken),
        core::result::Result::Err(ResultError::Construction {
            reason: "no absent constructor".to_string()
        })
    );
}

#[test]
fn transpose_with_factory() {
    let factory = TypeFactory::<Maybe<Result<i32, &str>>>::new();

    let err: Result<Maybe<i32>, &str> = Err("error");
    assert_eq!(
        err.transpose_with(&factory),
        core::result::Result::Ok(Maybe::Some(Err("error")))
    );

    let none: Result<Maybe<i32>, &str> = Ok(Maybe::None);
    assert_eq!(none.transpose_with(&factory), core::result::Result::Ok(Maybe::None));

    type Built = core::result::Result<Option<Result<i32, &'static str>>, String>;
    let refusing = FnFactory::new(
        || -> Built { core::result::Result::Ok(None) },
        |_: Result<i32, &'static str>| -> Built {
            core::result::Result::Err("present case refused".to_string())
        },
    );
    let some: Result<Option<i32>, &str> = Ok(Some(1));
    let failure = some.transpose_with(&refusing).unwrap_err();
    assert_eq!(failure.kind(), "Construction");
}

#[test]
fn converts_to_and_from_core_result() {
    fn parse(s: &str) -> core::result::Result<i32, std::num::ParseIntError> {
        let r: Result<i32, _> = s.parse::<i32>().into();
        let v = r.map(|v| v + 1).into_core()?;
        core::result::Result::Ok(v)
    }

    assert_eq!(parse("41"), core::result::Result::Ok(42));
    assert!(parse("x").is_err());

    let wrapped: Result<i32, &str> = core::result::Result::Err("e").into();
    let back: core::result::Result<i32, &str> = wrapped.into();
    assert_eq!(back, core::result::Result::Err("e"));
}

#[test]
fn collect_stops_at_first_err() {
    let consumed = Cell::new(0);
    let inputs: [Result<i32, &str>; 4] = [Ok(1), Err("bad"), Ok(3), Err("worse")];
    let collected: Result<Vec<i32>, &str> = inputs
        .iter()
        .inspect(|_| consumed.set(consumed.get() + 1))
        .copied()
        .collect();
    assert_eq!(collected, Err("bad"));
    assert_eq!(consumed.get(), 2);

    let all: Result<Vec<i32>, &str> = [Ok(1), Ok(2), Ok(3)].into_iter().collect();
    assert_eq!(all, Ok(vec![1, 2, 3]));
}
