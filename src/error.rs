// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two families that never overlap:
//!
//! - [`ContractViolation`]: a value broke a condition. Expected, caller-facing.
//! - [`ConfigurationError`]: the check itself was set up wrong (an error type
//!   with no construction path, a fixed tier toggled, inverted bounds). This
//!   is a defect at the call site, not a broken business rule.
//!
//! [`CheckError`] carries one or the other and is what every check returns.

use crate::kind::FailureKind;
use crate::tier::TierKind;
use serde::Serialize;

/// A violated condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ContractViolation {
    kind: FailureKind,
    label: Option<String>,
    message: String,
    index: Option<usize>,
    value: Option<String>,
}

impl ContractViolation {
    pub(crate) fn new(
        kind: FailureKind,
        label: Option<String>,
        message: String,
        index: Option<usize>,
        value: Option<String>,
    ) -> Self {
        Self {
            kind,
            label,
            message,
            index,
            value,
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The subject label (value name, or caller-derived fallback).
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Position of the offending element for element-wise checks.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// `Debug` rendering of the offending value, when the check captured one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A check that could not be carried out as configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The requested error type offers no constructor for the assertion.
    #[error(
        "`{type_name}` has no construction path for {arity} argument(s) or message {message:?}"
    )]
    NoConstructionPath {
        type_name: &'static str,
        message: String,
        arity: usize,
    },

    /// Mandatory and DebugOnly are fixed for the life of the process.
    #[error("the {tier} tier is fixed and cannot be toggled at runtime")]
    ImmutableTier { tier: TierKind },

    /// The check's own arguments contradict each other.
    #[error("inconsistent check arguments: {reason}")]
    InconsistentArguments { reason: String },
}

/// Error returned by every check: a violation of type `E`, or a configuration
/// defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError<E = ContractViolation> {
    #[error("{0}")]
    Violation(E),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl<E> CheckError<E> {
    pub fn violation(&self) -> Option<&E> {
        match self {
            CheckError::Violation(err) => Some(err),
            CheckError::Configuration(_) => None,
        }
    }

    pub fn into_violation(self) -> Option<E> {
        match self {
            CheckError::Violation(err) => Some(err),
            CheckError::Configuration(_) => None,
        }
    }

    pub fn configuration(&self) -> Option<&ConfigurationError> {
        match self {
            CheckError::Violation(_) => None,
            CheckError::Configuration(err) => Some(err),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, CheckError::Configuration(_))
    }
}

impl CheckError<ContractViolation> {
    /// The violated kind, or `None` for configuration defects.
    pub fn kind(&self) -> Option<FailureKind> {
        self.violation().map(ContractViolation::kind)
    }
}

impl From<ContractViolation> for CheckError<ContractViolation> {
    fn from(violation: ContractViolation) -> Self {
        CheckError::Violation(violation)
    }
}

/// Result of a check with the built-in violation type.
pub type CheckResult<T, E = ContractViolation> = Result<T, CheckError<E>>;
