// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-call diagnostic context.
//!
//! A [`CheckContext`] is built fresh for every check and dropped once the
//! check resolves. It carries an optional value name, an optional message
//! override, and an optional [`Caller`] label. The caller label is only used
//! when no value name was given.
//!
//! ```ignore
//! REQUIRE.not_null(port, "port")?;
//! REQUIRE.not_null(port, CheckContext::named("port").message("port is required"))?;
//! RESULT.result(total, |t| *t > 0, CheckContext::result_of("checksum"))?;
//! ```

use std::borrow::Cow;

/// Where a check was invoked from, used as the fallback subject label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// A plain function or method invocation.
    Function(Cow<'static, str>),
    /// The return value of a member.
    Result(Cow<'static, str>),
    /// A value being assigned to a member (property setter).
    Assignment(Cow<'static, str>),
}

impl Caller {
    pub fn member(&self) -> &str {
        match self {
            Caller::Function(name) | Caller::Result(name) | Caller::Assignment(name) => name,
        }
    }
}

/// Optional name, message and caller label for one check invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckContext {
    value_name: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    caller: Option<Caller>,
}

impl CheckContext {
    /// A context with no name, message or caller.
    pub const fn anonymous() -> Self {
        Self {
            value_name: None,
            message: None,
            caller: None,
        }
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value_name: Some(name.into()),
            ..Self::anonymous()
        }
    }

    /// Context for validating the return value of `member`.
    pub fn result_of(member: impl Into<Cow<'static, str>>) -> Self {
        Self::anonymous().caller(Caller::Result(member.into()))
    }

    /// Context for validating a value assigned to `member`.
    pub fn assignment_to(member: impl Into<Cow<'static, str>>) -> Self {
        Self::anonymous().caller(Caller::Assignment(member.into()))
    }

    /// Context labelled by the invoking function.
    pub fn invoked_by(function: impl Into<Cow<'static, str>>) -> Self {
        Self::anonymous().caller(Caller::Function(function.into()))
    }

    /// Override the default message verbatim.
    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn value_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    pub fn message_override(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn caller_label(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    /// The subject label used in default messages.
    ///
    /// The value name wins; the caller label is only a fallback.
    pub fn subject(&self) -> Option<Cow<'_, str>> {
        if let Some(name) = &self.value_name {
            return Some(Cow::Borrowed(name.as_ref()));
        }
        self.caller.as_ref().map(|caller| match caller {
            Caller::Function(name) | Caller::Assignment(name) => Cow::Borrowed(name.as_ref()),
            Caller::Result(member) => Cow::Owned(format!("result of {member}")),
        })
    }

    /// Member receiving an assignment, if this is a setter context without a
    /// value name.
    pub fn assignment_member(&self) -> Option<&str> {
        if self.value_name.is_some() {
            return None;
        }
        match &self.caller {
            Some(Caller::Assignment(member)) => Some(member),
            _ => None,
        }
    }
}

impl From<&'static str> for CheckContext {
    fn from(name: &'static str) -> Self {
        CheckContext::named(name)
    }
}

impl From<String> for CheckContext {
    fn from(name: String) -> Self {
        CheckContext::named(name)
    }
}

impl From<Option<&'static str>> for CheckContext {
    fn from(name: Option<&'static str>) -> Self {
        match name {
            Some(name) => CheckContext::named(name),
            None => CheckContext::anonymous(),
        }
    }
}

impl From<()> for CheckContext {
    fn from((): ()) -> Self {
        CheckContext::anonymous()
    }
}

impl From<Caller> for CheckContext {
    fn from(caller: Caller) -> Self {
        CheckContext::anonymous().caller(caller)
    }
}

/// Trim a `std::any::type_name` path down to the enclosing function name.
///
/// Closure segments are skipped so a check inside a closure is still
/// attributed to the function that contains it.
#[doc(hidden)]
pub fn function_label(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__here").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| !segment.starts_with('{'))
        .unwrap_or(path)
}

/// Member name for a setter function: `set_width` becomes `width`.
#[doc(hidden)]
pub fn setter_label(function: &'static str) -> &'static str {
    function.strip_prefix("set_").unwrap_or(function)
}
