// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional constructor arguments for caller-chosen error types.
//!
//! Arguments are matched against a constructor by position and type. Integers
//! convert when the value fits the target width; there is no coercion between
//! integers, floats, strings and booleans.

use std::fmt;

/// One positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Short type tag used in diagnostics.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Arg::Str(_) => "str",
            Arg::Int(_) => "int",
            Arg::UInt(_) => "uint",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(v) => f.write_str(v),
            Arg::Int(v) => write!(f, "{v}"),
            Arg::UInt(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Char(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

macro_rules! signed_arg {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Arg::Int(i64::from(value))
            }
        }
    )*};
}

macro_rules! unsigned_arg {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Arg::UInt(u64::from(value))
            }
        }
    )*};
}

signed_arg!(i8, i16, i32, i64);
unsigned_arg!(u8, u16, u32, u64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on supported targets
        Arg::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

/// A constructor parameter type that can be filled from an [`Arg`].
pub trait FromArg: Sized {
    fn from_arg(arg: &Arg) -> Option<Self>;
}

impl FromArg for String {
    fn from_arg(arg: &Arg) -> Option<Self> {
        arg.as_str().map(str::to_owned)
    }
}

impl FromArg for bool {
    fn from_arg(arg: &Arg) -> Option<Self> {
        match arg {
            Arg::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromArg for char {
    fn from_arg(arg: &Arg) -> Option<Self> {
        match arg {
            Arg::Char(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromArg for f64 {
    fn from_arg(arg: &Arg) -> Option<Self> {
        match arg {
            Arg::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromArg for f32 {
    fn from_arg(arg: &Arg) -> Option<Self> {
        match arg {
            #[allow(clippy::cast_possible_truncation)]
            Arg::Float(v) => Some(*v as f32),
            _ => None,
        }
    }
}

macro_rules! integer_from_arg {
    ($($ty:ty),*) => {$(
        impl FromArg for $ty {
            fn from_arg(arg: &Arg) -> Option<Self> {
                match arg {
                    Arg::Int(v) => <$ty>::try_from(*v).ok(),
                    Arg::UInt(v) => <$ty>::try_from(*v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

integer_from_arg!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Ordered argument list handed to [`ErrorFactory::from_args`](super::ErrorFactory::from_args).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Arg>);

impl Args {
    pub const fn new() -> Self {
        Args(Vec::new())
    }

    #[must_use]
    pub fn with(mut self, arg: impl Into<Arg>) -> Self {
        self.0.push(arg.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.0.get(index)
    }

    /// Convert the argument at `index` to a constructor parameter.
    pub fn take<T: FromArg>(&self, index: usize) -> Option<T> {
        self.0.get(index).and_then(T::from_arg)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.0.iter()
    }

    /// Positional signature, e.g. `(str, uint)`.
    pub fn signature(&self) -> String {
        let tags: Vec<&str> = self.0.iter().map(Arg::type_tag).collect();
        format!("({})", tags.join(", "))
    }
}

impl<A: Into<Arg>> From<Vec<A>> for Args {
    fn from(args: Vec<A>) -> Self {
        Args(args.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Arg>, const N: usize> From<[A; N]> for Args {
    fn from(args: [A; N]) -> Self {
        Args(args.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Args {
    fn from((): ()) -> Self {
        Args::new()
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Args(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
