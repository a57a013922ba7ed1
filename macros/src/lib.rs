// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for `stipulate`.
//!
//! Two jobs that a function call cannot do on its own:
//!
//! 1. **Static constructor discovery.** `#[derive(ErrorFactory)]` reads an
//!    error struct's shape at compile time and implements the construction
//!    paths it supports, so `assert::<T, MyError>` can build `MyError` without
//!    any runtime reflection.
//! 2. **Caller labels.** `#[ensures]` and `#[setter]` know the name of the
//!    function they decorate, so return-value and assignment failures are
//!    labelled `result of checksum` or `attempt to assign 0 to width` without
//!    the caller spelling either out.
//!
//! # Example
//!
//! ```ignore
//! use stipulate::{ensures, setter, ErrorFactory};
//!
//! #[derive(Debug, ErrorFactory)]
//! struct QuotaError(String);
//!
//! #[ensures(|n| *n > 0)]
//! fn checksum(data: &[u8]) -> Result<u32, Box<dyn std::error::Error>> {
//!     Ok(data.iter().map(|b| u32::from(*b)).sum())
//! }
//!
//! impl Canvas {
//!     #[setter(|w| *w > 0, message = "width must be positive")]
//!     fn set_width(&mut self, width: u32) -> Result<(), stipulate::CheckError> {
//!         self.width = width;
//!         Ok(())
//!     }
//! }
//! ```

use proc_macro::TokenStream;

mod contract;
mod error_factory;
mod shape;

/// Derive `stipulate::ErrorFactory` from the struct shape.
///
/// | Struct shape | Paths implemented |
/// |--------------|-------------------|
/// | unit, or every field `#[factory(default)]` | `bare` |
/// | exactly one `String` | `from_args`, `from_message` |
/// | one `String` plus only `Option<_>` fields | `from_message_without_cause` |
/// | only `String` / integer / float / `bool` / `char` fields | `from_args` (exact arity) |
///
/// # Field Attributes
///
/// - `#[factory(default)]` - Fill with `Default::default()` and leave out of
///   the shape analysis
#[proc_macro_derive(ErrorFactory, attributes(factory))]
pub fn derive_error_factory(input: TokenStream) -> TokenStream {
    error_factory::derive(input)
}

/// Check a function's `Ok` value on the result-directed tier.
///
/// Failures are `StateInvalid`, labelled `result of <function>`. The body
/// runs first; its own errors propagate unchanged.
///
/// # Attributes
///
/// - first argument - predicate closure over `&T`
/// - `message = "..."` - Replace the default message
#[proc_macro_attribute]
pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::ensures(attr, item)
}

/// Check the first parameter of a setter on the setter-directed tier.
///
/// Failures are `ArgumentInvalid`, labelled with the function name minus a
/// leading `set_`, and the message names the rejected value.
///
/// # Attributes
///
/// - first argument - predicate closure over `&T`
/// - `message = "..."` - Replace the default message
#[proc_macro_attribute]
pub fn setter(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::setter(attr, item)
}
