//! Environment variable expansion for configuration strings.
//!
//! Supports two forms:
//! - `${VAR}` — the value of `VAR`; an error if unset
//! - `${VAR:-default}` — the value of `VAR` if set, otherwise `default`
//!
//! Text outside `${…}` passes through unchanged.

use crate::ConfigError;

/// Expand `${VAR}` references in `value`.
///
/// `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unterminated ${ reference".to_owned(),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match std::env::var(name) {
            Ok(val) => out.push_str(&val),
            Err(_) => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("http://localhost:8000/api", "api.base_url").unwrap(),
            "http://localhost:8000/api"
        );
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LUYEN_TEST_HOST", "api.example.com");
        }

        assert_eq!(
            expand_env("https://${LUYEN_TEST_HOST}/api", "api.base_url").unwrap(),
            "https://api.example.com/api"
        );

        unsafe {
            std::env::remove_var("LUYEN_TEST_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        unsafe {
            std::env::remove_var("LUYEN_TEST_MISSING");
        }

        assert_eq!(
            expand_env("${LUYEN_TEST_MISSING:-http://localhost:8000/api}", "api.base_url").unwrap(),
            "http://localhost:8000/api"
        );
    }

    #[test]
    fn test_missing_without_default_errors() {
        unsafe {
            std::env::remove_var("LUYEN_TEST_MISSING");
        }

        let err = expand_env("${LUYEN_TEST_MISSING}", "api.base_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LUYEN_TEST_MISSING"));
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_unterminated_reference_errors() {
        let err = expand_env("${OOPS", "api.base_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
    }
}
