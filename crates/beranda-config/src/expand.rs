//! Environment variable expansion for config values.
//!
//! Supports `${VAR}` (errors when unset) and `${VAR:-default}`.

use std::env;

/// Error during environment variable expansion.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// `${VAR}` referenced an unset variable without a default.
    #[error("environment variable not set: {0}")]
    UnsetVar(String),
    /// `${` without a closing `}`.
    #[error("unterminated ${{...}} expression")]
    Unterminated,
}

/// Expand `${VAR}` / `${VAR:-default}` occurrences in a config value.
pub fn expand(input: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or(ExpandError::Unterminated)?;
        let expr = &after[..end];

        let (name, default) = match expr.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (expr, None),
        };

        match env::var(name) {
            Ok(value) => output.push_str(&value),
            Err(_) => match default {
                Some(default) => output.push_str(default),
                None => return Err(ExpandError::UnsetVar(name.to_owned())),
            },
        }

        rest = &after[end + 1..];
    }
    output.push_str(rest);
    Ok(output)
}
