// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The closed catalogue of contract violations.
//!
//! Every condition maps to exactly one [`FailureKind`]. The kind decides the
//! default message template and which family of constraint it belongs to.
//!
//! | Constraint       | Kinds                                                    |
//! |------------------|----------------------------------------------------------|
//! | Existence        | `ArgumentNull`                                           |
//! | Shape            | `ValueEmpty`, `CollectionEmpty`                          |
//! | Range            | `ArgumentOutOfRange`, `ValueOutOfRange`, `ArgumentInvalid` |
//! | Membership       | `EnumInvalid`, `KeyNotFound`                             |
//! | TypeCompat       | `TypeMismatch`                                           |
//! | ElementWise      | `ItemNull`, `ItemInvalid`                                |
//! | State            | `StateInvalid`, `ObjectDisposed`                         |
//! | Resource         | `UriInvalid`, `FileNotFound`, `DirectoryNotFound`, `StreamInvalid` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical category of a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ArgumentNull,
    ArgumentOutOfRange,
    ArgumentInvalid,
    ValueEmpty,
    ValueOutOfRange,
    CollectionEmpty,
    ItemNull,
    ItemInvalid,
    TypeMismatch,
    EnumInvalid,
    KeyNotFound,
    StateInvalid,
    ObjectDisposed,
    UriInvalid,
    FileNotFound,
    DirectoryNotFound,
    StreamInvalid,
}

/// The constraint family a condition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Existence,
    Shape,
    Range,
    Membership,
    TypeCompat,
    ElementWise,
    State,
    Resource,
}

impl FailureKind {
    /// All kinds, in declaration order.
    pub const ALL: [FailureKind; 17] = [
        FailureKind::ArgumentNull,
        FailureKind::ArgumentOutOfRange,
        FailureKind::ArgumentInvalid,
        FailureKind::ValueEmpty,
        FailureKind::ValueOutOfRange,
        FailureKind::CollectionEmpty,
        FailureKind::ItemNull,
        FailureKind::ItemInvalid,
        FailureKind::TypeMismatch,
        FailureKind::EnumInvalid,
        FailureKind::KeyNotFound,
        FailureKind::StateInvalid,
        FailureKind::ObjectDisposed,
        FailureKind::UriInvalid,
        FailureKind::FileNotFound,
        FailureKind::DirectoryNotFound,
        FailureKind::StreamInvalid,
    ];

    /// Default message template. `{}` is replaced by the subject label.
    pub const fn template(self) -> &'static str {
        match self {
            FailureKind::ArgumentNull => "{} must not be null",
            FailureKind::ArgumentOutOfRange => "{} is out of range",
            FailureKind::ArgumentInvalid => "{} is invalid",
            FailureKind::ValueEmpty => "{} must not be empty",
            FailureKind::ValueOutOfRange => "{} is outside the permitted range",
            FailureKind::CollectionEmpty => "{} must contain at least one element",
            FailureKind::ItemNull => "{} must not contain null items",
            FailureKind::ItemInvalid => "{} contains an invalid item",
            FailureKind::TypeMismatch => "{} is not of the expected type",
            FailureKind::EnumInvalid => "{} is not a defined enum value",
            FailureKind::KeyNotFound => "{} does not contain the requested key",
            FailureKind::StateInvalid => "{} is in an invalid state",
            FailureKind::ObjectDisposed => "{} has been disposed",
            FailureKind::UriInvalid => "{} is not a valid URI",
            FailureKind::FileNotFound => "{} does not name an existing file",
            FailureKind::DirectoryNotFound => "{} does not name an existing directory",
            FailureKind::StreamInvalid => "{} is not a usable stream",
        }
    }

    /// Render the default message for `subject`.
    pub fn render(self, subject: &str) -> String {
        self.template().replacen("{}", subject, 1)
    }

    pub const fn constraint(self) -> Constraint {
        match self {
            FailureKind::ArgumentNull => Constraint::Existence,
            FailureKind::ValueEmpty | FailureKind::CollectionEmpty => Constraint::Shape,
            FailureKind::ArgumentOutOfRange
            | FailureKind::ValueOutOfRange
            | FailureKind::ArgumentInvalid => Constraint::Range,
            FailureKind::EnumInvalid | FailureKind::KeyNotFound => Constraint::Membership,
            FailureKind::TypeMismatch => Constraint::TypeCompat,
            FailureKind::ItemNull | FailureKind::ItemInvalid => Constraint::ElementWise,
            FailureKind::StateInvalid | FailureKind::ObjectDisposed => Constraint::State,
            FailureKind::UriInvalid
            | FailureKind::FileNotFound
            | FailureKind::DirectoryNotFound
            | FailureKind::StreamInvalid => Constraint::Resource,
        }
    }

    /// Stable snake_case identifier, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::ArgumentNull => "argument_null",
            FailureKind::ArgumentOutOfRange => "argument_out_of_range",
            FailureKind::ArgumentInvalid => "argument_invalid",
            FailureKind::ValueEmpty => "value_empty",
            FailureKind::ValueOutOfRange => "value_out_of_range",
            FailureKind::CollectionEmpty => "collection_empty",
            FailureKind::ItemNull => "item_null",
            FailureKind::ItemInvalid => "item_invalid",
            FailureKind::TypeMismatch => "type_mismatch",
            FailureKind::EnumInvalid => "enum_invalid",
            FailureKind::KeyNotFound => "key_not_found",
            FailureKind::StateInvalid => "state_invalid",
            FailureKind::ObjectDisposed => "object_disposed",
            FailureKind::UriInvalid => "uri_invalid",
            FailureKind::FileNotFound => "file_not_found",
            FailureKind::DirectoryNotFound => "directory_not_found",
            FailureKind::StreamInvalid => "stream_invalid",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
