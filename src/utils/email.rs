use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Syntactic check only: one local part, one domain with a dot.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
