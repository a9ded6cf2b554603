//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// One '@', no whitespace, a dot in the domain part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Normalize an email address into its lookup key
///
/// Only lower-cases the whole string; no trimming and no Unicode
/// canonicalization beyond what `str::to_lowercase` does.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Check that an email address has a plausible shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check whether a value is missing for validation purposes
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Mask an email address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
