#![allow(non_snake_case)]

use super::*;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

fn counting_callback() -> (LogCallback, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let callback: LogCallback = Arc::new(move |_level: LogLevel, _target: &str, _message: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (callback, count)
}

#[test]
fn LogCallbackManager___new___default_level_is_info() {
    let manager = LogCallbackManager::new();

    assert_eq!(manager.level(), LogLevel::Info);
}

#[test]
fn LogCallbackManager___new___no_callback_set() {
    let manager = LogCallbackManager::new();

    assert!(manager.get_callback().is_none());
}

#[test]
fn LogCallbackManager___set_level___changes_level() {
    let manager = LogCallbackManager::new();

    manager.set_level(LogLevel::Debug);

    assert_eq!(manager.level(), LogLevel::Debug);
}

#[test]
fn LogCallbackManager___is_enabled___respects_level_ordering() {
    let manager = LogCallbackManager::new();
    manager.set_level(LogLevel::Debug);

    assert!(manager.is_enabled(LogLevel::Debug));
    assert!(manager.is_enabled(LogLevel::Info));
    assert!(manager.is_enabled(LogLevel::Error));
    assert!(!manager.is_enabled(LogLevel::Trace));
}

#[test]
fn LogCallbackManager___level_off___disables_everything() {
    let manager = LogCallbackManager::new();
    manager.set_level(LogLevel::Off);

    assert!(!manager.is_enabled(LogLevel::Error));
    assert!(!manager.is_enabled(LogLevel::Off));
}

#[test]
fn LogCallbackManager___set_callback_none___clears_callback() {
    let manager = LogCallbackManager::new();
    let (callback, _) = counting_callback();
    manager.set_callback(Some(callback));

    manager.set_callback(None);

    assert!(manager.get_callback().is_none());
}

#[test]
fn LogCallbackManager___log___invokes_callback_when_enabled() {
    let manager = LogCallbackManager::new();
    let (callback, count) = counting_callback();
    manager.set_callback(Some(callback));

    manager.log(LogLevel::Info, "routeproto_core::document", "pass finished");

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn LogCallbackManager___log___skips_callback_when_level_too_low() {
    let manager = LogCallbackManager::new();
    let (callback, count) = counting_callback();
    manager.set_callback(Some(callback));

    manager.log(LogLevel::Debug, "routeproto_core::document", "compiling route");

    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn LogCallbackManager___log___passes_level_target_and_message() {
    let captured: Arc<Mutex<Option<(LogLevel, String, String)>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);
    let manager = LogCallbackManager::new();
    manager.set_callback(Some(Arc::new(move |level: LogLevel, target: &str, message: &str| {
        *sink.lock().unwrap() = Some((level, target.to_string(), message.to_string()));
    })));

    manager.log(LogLevel::Warn, "routeproto_core::document", "duplicate rpc name");

    let captured = captured.lock().unwrap().clone().unwrap();
    assert_eq!(captured.0, LogLevel::Warn);
    assert_eq!(captured.1, "routeproto_core::document");
    assert_eq!(captured.2, "duplicate rpc name");
}

#[test]
fn LogCallbackManager___log___no_panic_without_callback() {
    let manager = LogCallbackManager::new();

    manager.log(LogLevel::Info, "test", "message");
}

#[test]
fn LogCallbackManager___default___same_as_new() {
    let manager = LogCallbackManager::default();

    assert_eq!(manager.level(), LogLevel::Info);
    assert!(manager.get_callback().is_none());
}
