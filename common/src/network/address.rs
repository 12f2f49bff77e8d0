use std::sync::LazyLock;

use regex::Regex;

/// Loose IPv4 shape: three dot terminated groups of up to three digits and a
/// trailing group of up to three digits. Octet ranges are not checked.
pub const IP_PATTERN: &str = r"(?:\d{0,3}\.){3}\d{0,3}";

static IP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IP_PATTERN).expect("IP_PATTERN is a valid regex"));

/// Every non-overlapping IPv4-shaped substring of `text`, in order of appearance.
pub fn extract_addresses(text: &str) -> Vec<String> {
    IP_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
