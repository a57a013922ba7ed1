// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Declarative macros for caller-labelled checks.
//!
//! The caller's name is resolved at compile time from the type name of a
//! function item declared at the call site; no call-site metadata is needed
//! at runtime.

/// Name of the enclosing function, as a `&'static str`.
///
/// Inside a closure, the function containing the closure is reported.
///
/// ```ignore
/// fn checksum() -> &'static str {
///     caller_name!()
/// }
/// assert_eq!(checksum(), "checksum");
/// ```
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::context::function_label(__type_name_of(__here))
    }};
}

/// A [`CheckContext`](crate::CheckContext) labelled by the enclosing function,
/// for checks whose value has no name of its own.
///
/// ```ignore
/// fn load(path: Option<&str>) -> CheckResult<&str> {
///     REQUIRE.not_null(path, caller_context!())
/// }
/// // fails with "load must not be null: found None"
/// ```
#[macro_export]
macro_rules! caller_context {
    () => {
        $crate::CheckContext::invoked_by($crate::caller_name!())
    };
    (message = $message:expr $(,)?) => {
        $crate::CheckContext::invoked_by($crate::caller_name!()).message($message)
    };
}

/// Check a return value on the [`RESULT`](crate::RESULT) guard, labelled
/// `result of <enclosing function>`.
///
/// ```ignore
/// fn checksum(data: &[u8]) -> CheckResult<u32> {
///     let sum = data.iter().map(|b| u32::from(*b)).sum();
///     check_result!(sum, |s| *s > 0)
/// }
/// ```
#[macro_export]
macro_rules! check_result {
    ($value:expr, $holds:expr $(,)?) => {
        $crate::RESULT.result(
            $value,
            $holds,
            $crate::CheckContext::result_of($crate::caller_name!()),
        )
    };
    ($value:expr, $holds:expr, message = $message:expr $(,)?) => {
        $crate::RESULT.result(
            $value,
            $holds,
            $crate::CheckContext::result_of($crate::caller_name!()).message($message),
        )
    };
}

/// Check a value about to be assigned on the [`SETTER`](crate::SETTER) guard.
///
/// The member is the enclosing function's name with any `set_` prefix
/// removed.
#[macro_export]
macro_rules! check_assign {
    ($value:expr, $holds:expr $(,)?) => {
        $crate::SETTER.assign(
            $value,
            $holds,
            $crate::CheckContext::assignment_to($crate::context::setter_label(
                $crate::caller_name!(),
            )),
        )
    };
}

/// Positional constructor arguments of mixed types.
///
/// ```ignore
/// let args = args!["disk full", 507u16, true];
/// assert_eq!(args.signature(), "(str, uint, bool)");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($arg))+
    };
}
