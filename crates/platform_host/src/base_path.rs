//! Deployment base-path normalization shared by the site runtime, its build script and `xtask`.

use thiserror::Error;

use crate::LocationSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a configured base path is rejected.
pub enum BasePathError {
    /// The base path contains a `.`/`..` segment.
    #[error("base path `{0}` is relative; deploy under an absolute prefix such as `/app/`")]
    Relative(String),
    /// The base path carries a character outside the URL-path-safe set (`?` and `#` included).
    #[error("base path `{value}` must not contain `{found}`")]
    ForbiddenCharacter {
        /// Raw configured value.
        value: String,
        /// First offending character.
        found: char,
    },
}

fn is_path_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '/' | '-' | '_' | '.' | '~' | '%')
}

/// Normalizes a configured base path to `/segment/.../` form (or `/`).
///
/// A full URL (`https://host/prefix`) contributes only its path. Query and fragment markers,
/// characters outside `[A-Za-z0-9/-_.~%]` and `.`/`..` segments are rejected, so the result can
/// be embedded in HTML and script without escaping.
///
/// # Errors
///
/// Returns [`BasePathError`] naming the first rule the value breaks.
pub fn normalize_base_path(raw: &str) -> Result<String, BasePathError> {
    let trimmed = raw.trim();
    let forbidden = |found| BasePathError::ForbiddenCharacter {
        value: raw.to_string(),
        found,
    };

    if let Some(found) = trimmed.chars().find(|ch| matches!(ch, '?' | '#')) {
        return Err(forbidden(found));
    }

    let path = if trimmed.contains("://") {
        LocationSnapshot::parse(trimmed).pathname
    } else {
        trimmed.to_string()
    };
    if let Some(found) = path.chars().find(|ch| !is_path_safe(*ch)) {
        return Err(forbidden(found));
    }

    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.iter().any(|segment| matches!(*segment, "." | "..")) {
        return Err(BasePathError::Relative(raw.to_string()));
    }

    if segments.is_empty() {
        return Ok("/".to_string());
    }
    Ok(format!("/{}/", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_paths_normalize_to_single_leading_and_trailing_slash() {
        let cases = [
            ("", "/"),
            ("/", "/"),
            ("  /app  ", "/app/"),
            ("app", "/app/"),
            ("/app//", "/app/"),
            ("//nested//deploy", "/nested/deploy/"),
            ("/fineline/preview-2_~x/", "/fineline/preview-2_~x/"),
            ("https://example.github.io/fineline", "/fineline/"),
            ("https://example.github.io", "/"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_base_path(input).as_deref(),
                Ok(expected),
                "input={input:?}"
            );
        }
    }

    #[test]
    fn base_paths_reject_relative_segments_and_unsafe_characters() {
        let relative = ["./", "../app", "/app/./x"];
        for input in relative {
            assert_eq!(
                normalize_base_path(input),
                Err(BasePathError::Relative(input.to_string())),
                "input={input:?}"
            );
        }

        let forbidden = [
            ("/app/?x=1", '?'),
            ("/app#top", '#'),
            ("/a\"b/", '"'),
            ("/a b/", ' '),
            ("/a\\b", '\\'),
            ("/<script>", '<'),
            ("c:/app", ':'),
        ];
        for (input, found) in forbidden {
            assert_eq!(
                normalize_base_path(input),
                Err(BasePathError::ForbiddenCharacter {
                    value: input.to_string(),
                    found,
                }),
                "input={input:?}"
            );
        }
    }
}
