// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::context::CheckContext;
use crate::error::CheckResult;
use crate::guard::{violation, Guard};
use crate::kind::FailureKind;
use crate::synthesis::Detail;
use crate::tier::Tier;
use std::io::Seek;
use std::path::Path;
use url::Url;

/// Absolute-URI check: `scheme ":" hier-part`, parsed by [`url::Url`].
///
/// The parser trims surrounding whitespace and re-encodes non-ASCII text and
/// stray `%` signs, so the raw text is checked first: the scheme must start
/// the string, the rest must be non-empty ASCII with well-formed `%XX`
/// escapes, and a `//` authority may only be empty for `file`.
pub fn is_absolute_uri(candidate: &str) -> bool {
    let Some((scheme, rest)) = candidate.split_once(':') else {
        return false;
    };
    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok || rest.is_empty() || !valid_uri_chars(rest) {
        return false;
    }
    let authority_ok = match rest.strip_prefix("//") {
        Some(after) => {
            let authority = after.split(['/', '?', '#']).next().unwrap_or("");
            !authority.is_empty() || scheme.eq_ignore_ascii_case("file")
        }
        None => true,
    };
    authority_ok && Url::parse(candidate).is_ok()
}

fn valid_uri_chars(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let hex = bytes.get(i + 1..i + 3);
            if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
            continue;
        }
        let allowed = b.is_ascii_alphanumeric()
            || b"-._~:/?#[]@!$&'()*+,;=".contains(&b);
        if !allowed {
            return false;
        }
        i += 1;
    }
    true
}

impl<T: Tier> Guard<T> {
    /// Fail with `UriInvalid` unless `value` is an absolute URI.
    #[inline]
    pub fn uri<S: AsRef<str>>(self, value: S, ctx: impl Into<CheckContext>) -> CheckResult<S> {
        self.check_with(
            value,
            |s| is_absolute_uri(s.as_ref()),
            FailureKind::UriInvalid,
            ctx,
            |s| Detail::none().with_value(&s.as_ref()),
        )
    }

    /// Fail with `FileNotFound` unless `path` names an existing file.
    #[inline]
    pub fn file_exists<P: AsRef<Path>>(
        self,
        path: P,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<P> {
        self.check_with(
            path,
            |p| p.as_ref().is_file(),
            FailureKind::FileNotFound,
            ctx,
            |p| Detail::note(p.as_ref().display().to_string()),
        )
    }

    /// Fail with `DirectoryNotFound` unless `path` names an existing directory.
    #[inline]
    pub fn dir_exists<P: AsRef<Path>>(
        self,
        path: P,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<P> {
        self.check_with(
            path,
            |p| p.as_ref().is_dir(),
            FailureKind::DirectoryNotFound,
            ctx,
            |p| Detail::note(p.as_ref().display().to_string()),
        )
    }

    /// Fail with `StreamInvalid` unless `stream` is positioned at its start.
    ///
    /// A stream whose position cannot be read is also invalid.
    pub fn stream_rewound<S: Seek>(
        self,
        mut stream: S,
        ctx: impl Into<CheckContext>,
    ) -> CheckResult<S> {
        if !T::enabled() {
            return Ok(stream);
        }
        let note = match stream.stream_position() {
            Ok(0) => return Ok(stream),
            Ok(position) => format!("positioned at byte {position}"),
            Err(err) => format!("position unavailable: {err}"),
        };
        Err(violation(FailureKind::StreamInvalid, ctx, Detail::note(note)))
    }
}
