//! Email address grammar.
//!
//! An address is a local part, `@`, and either a dotted domain whose last
//! label has at least two letters or a bracketed dotted quad. The local part
//! is one or more dot-separated atoms free of `<>()[]\.,;:@"` and whitespace,
//! or any single character followed by a quoted string. Matching happens on
//! the lower-cased input, so the check is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|.(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Whether `input` is a syntactically acceptable email address.
///
/// Never fails: anything that does not match, including the empty string,
/// is simply `false`.
pub fn is_valid_email(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EMAIL.as_ref().is_some_and(|re| re.is_match(&lowered))
}
