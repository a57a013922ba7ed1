// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The condition catalogue, one module per constraint family.
//!
//! Every condition is a predicate over `(value, constraint)` paired with one
//! [`FailureKind`](crate::FailureKind), and every one is a method on
//! [`Guard`](crate::Guard) so the same catalogue is available at each tier.
//!
//! | Module        | Checks                                                     |
//! |---------------|------------------------------------------------------------|
//! | `existence`   | `not_null`, `not_default`                                  |
//! | `shape`       | `not_empty`, `not_blank`                                   |
//! | `range`       | `index_in_range`, `in_range`, `between`, `within_by`,      |
//! |               | `not_negative`, `greater_than`, `at_most`                  |
//! | `membership`  | `enum_defined`, `enum_value`, `contains_key`               |
//! | `types`       | `instance_of`, `downcast`                                  |
//! | `elements`    | `all`, `all_in`, `no_nulls`                                |
//! | `state`       | `state`, `not_disposed`                                    |
//! | `resources`   | `uri`, `file_exists`, `dir_exists`, `stream_rewound`       |

mod elements;
mod existence;
mod membership;
mod range;
mod resources;
mod shape;
mod state;
mod types;

pub use membership::Keyed;
pub use resources::is_absolute_uri;
pub use shape::Measured;
