// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Guard clauses with tiered enablement and typed failure synthesis.
//!
//! Every check takes a value, validates it, and hands it back so checks
//! compose inline. A failed check becomes a typed error; a check whose tier
//! is switched off is not evaluated at all.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │   tier.rs   │────▶│   guard.rs   │────▶│ conditions/*  │
//! │ (Tier, flags│     │ (Guard<T>,   │     │ (not_null,    │
//! │  override)  │     │  check)      │     │  all, uri...) │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!                            │ on failure
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                      synthesis/                          │
//! │  raise (built-in kinds)   synthesize::<E> (ErrorFactory) │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!          CheckError<E> = Violation(E) | Configuration
//! ```
//!
//! # Tiers
//!
//! | Guard      | Tier              | Evaluated when                          |
//! |------------|-------------------|-----------------------------------------|
//! | `REQUIRE`  | `Mandatory`       | always                                  |
//! | `DEBUG`    | `DebugOnly`       | [`DEBUG_CHECKS`] (build time, constant) |
//! | `OPTIONAL` | `RuntimeOptional` | runtime flag                            |
//! | `RESULT`   | `ResultDirected`  | runtime flag                            |
//! | `SETTER`   | `SetterDirected`  | runtime flag                            |
//!
//! When a tier is off the check returns its input unvalidated. Narrowings
//! such as "not null" are only guaranteed on `REQUIRE`, which is why
//! `REQUIRE.not_null` returns `V` and `OPTIONAL.not_null` returns `Option<V>`.
//!
//! # Usage
//!
//! ```ignore
//! use stipulate::{assert, not_null, CheckContext, ErrorFactory, REQUIRE, OPTIONAL};
//!
//! let name = REQUIRE.not_blank(not_null(name, "name")?, "name")?;
//! let port = REQUIRE.between(port, 1, 65535, "port")?;
//! let hosts = OPTIONAL.all(hosts, |h| !h.is_empty(), "hosts")?;
//!
//! #[derive(Debug, ErrorFactory)]
//! struct QuotaError(String);
//! let used = assert::<u64, QuotaError>(used, |u| *u <= limit, ["quota exceeded"])?;
//! ```

extern crate self as stipulate;

mod assert;
pub mod conditions;
pub mod context;
mod error;
mod guard;
pub mod kind;
mod macros;
pub mod synthesis;
pub mod tier;

pub use assert::assert;
pub use conditions::{is_absolute_uri, Keyed, Measured};
pub use context::{Caller, CheckContext};
pub use error::{CheckError, CheckResult, ConfigurationError, ContractViolation};
pub use guard::{all, index_in_range, not_null, Guard, DEBUG, OPTIONAL, REQUIRE, RESULT, SETTER};
pub use kind::{Constraint, FailureKind};
pub use synthesis::{raise, synthesize, Arg, Args, Detail, ErrorFactory, ExceptionSpec, FromArg};
pub use tier::{
    override_tier, set_enabled, should_evaluate, DebugOnly, Mandatory, ResultDirected,
    RuntimeOptional, SetterDirected, Tier, TierKind, TierOverride, TierSnapshot, DEBUG_CHECKS,
};

#[cfg(feature = "macros")]
pub use stipulate_macros::{ensures, setter, ErrorFactory};
