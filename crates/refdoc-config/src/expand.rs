//! `${VAR}` expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// `${VAR}` must be set; `${VAR:-default}` falls back to `default`. Only
/// braced references are expanded: a bare `$` is copied through, even when
/// the same value also holds a `${...}` reference. An unterminated `${` is
/// kept as written.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut rest = value;
    let mut expanded = String::with_capacity(value.len());

    while let Some(start) = rest.find("${") {
        let Some(close) = rest[start..].find('}') else {
            break;
        };
        let end = start + close + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that could not be read.
struct UnsetVar(String);
