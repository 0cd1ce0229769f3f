//! Tests for the tracing/observability system.

use std::sync::Mutex;

use lrw_core::config::ObservabilityConfig;
use lrw_core::tracing::spans::names;
use lrw_core::tracing::{init_tracing, init_tracing_from_config, init_tracing_with_filter};

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_lrw_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    // Output goes to stderr; we only verify initialization does not panic.
    std::env::set_var("LRW_LOG", "debug");
    init_tracing();
    std::env::remove_var("LRW_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with_filter("lrw_xapi=trace");
    init_tracing_from_config(&ObservabilityConfig::default());
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("LRW_LOG", "this_is=garbage=not=a=filter");
    init_tracing();
    std::env::remove_var("LRW_LOG");
    init_tracing_with_filter("===");
}

#[test]
fn test_span_macros_use_named_spans() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing_with_filter("trace");

    let span = lrw_core::conversion_span!(names::DIRECTION_FROM_XAPI, Some("stmt-1"));
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::CONVERSION);
    }
    let _entered = span.enter();

    let span = lrw_core::session_span!("upsert", "tenant", "org");
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::SESSION);
    }
    let _entered = span.enter();
}
