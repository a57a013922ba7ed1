// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field type classification for `#[derive(ErrorFactory)]`.
//!
//! The derive only needs to know three things about a field type: whether it
//! can be filled from one positional argument, whether it is the message
//! string, and whether it is an optional cause slot that can be left `None`.

use syn::{GenericArgument, PathArguments, Type};

/// What a field can be filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// `String`: a message, or a string argument.
    Text,
    /// Integers, floats, `bool`, `char`.
    Scalar,
    /// `Option<_>`: left empty when building from a message.
    Optional,
    /// Anything else. Needs `#[factory(default)]` to be fillable.
    Other,
}

impl FieldShape {
    /// Whether a positional `Arg` can fill this field.
    pub fn takes_arg(self) -> bool {
        matches!(self, FieldShape::Text | FieldShape::Scalar)
    }
}

/// Classify a field type by its last path segment.
///
/// | Rust type | Shape |
/// |-----------|-------|
/// | `String` | `Text` |
/// | `u8`..`u64`, `usize`, `i8`..`i64`, `isize`, `f32`, `f64`, `bool`, `char` | `Scalar` |
/// | `Option<T>` | `Optional` |
/// | anything else | `Other` |
pub fn classify(ty: &Type) -> FieldShape {
    let Type::Path(type_path) = ty else {
        return FieldShape::Other;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return FieldShape::Other;
    };
    match segment.ident.to_string().as_str() {
        "String" => FieldShape::Text,
        "usize" | "u64" | "u32" | "u16" | "u8" | "isize" | "i64" | "i32" | "i16" | "i8"
        | "f64" | "f32" | "bool" | "char" => FieldShape::Scalar,
        "Option" if has_one_type_argument(&segment.arguments) => FieldShape::Optional,
        _ => FieldShape::Other,
    }
}

fn has_one_type_argument(arguments: &PathArguments) -> bool {
    match arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_)))
        }
        _ => false,
    }
}
