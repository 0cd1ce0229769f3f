//! Span definitions per operation: conversion and session storage.
//!
//! Each span carries the operation's identifying fields via the `tracing` crate.

/// Create a conversion span. `direction` is one of the `names::DIRECTION_*` values.
#[macro_export]
macro_rules! conversion_span {
    ($direction:expr, $id:expr) => {
        tracing::info_span!($crate::tracing::names::CONVERSION, direction = %$direction, id = ?$id)
    };
}

/// Create a session store span.
#[macro_export]
macro_rules! session_span {
    ($op:expr, $tenant:expr, $org:expr) => {
        tracing::debug_span!($crate::tracing::names::SESSION, op = %$op, tenant = %$tenant, org = %$org)
    };
}

/// Span names and field values as constants for programmatic use.
pub mod names {
    pub const CONVERSION: &str = "lrw.conversion";
    pub const SESSION: &str = "lrw.session";
    pub const DIRECTION_FROM_XAPI: &str = "xapi->caliper";
    pub const DIRECTION_TO_XAPI: &str = "caliper->xapi";
}
