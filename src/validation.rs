//! Field checks run before any storage call.

use regex::Regex;
use std::sync::LazyLock;

static ISBN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{10}$").expect("ISBN pattern is valid"));

/// Whether `isbn` is three ASCII digits, a hyphen and ten ASCII digits.
///
/// No checksum is verified.
pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN.is_match(isbn)
}

/// Whether `field` has at least one character. Whitespace counts.
pub fn is_non_empty(field: &str) -> bool {
    !field.is_empty()
}

/// Checks the key of a fetch or increment.
pub fn validate_read_request(isbn: &str, author: &str) -> bool {
    is_valid_isbn(isbn) && is_non_empty(author)
}

/// Checks the fields of a create.
pub fn validate_write_request(isbn: &str, author: &str, title: &str) -> bool {
    validate_read_request(isbn, author) && is_non_empty(title)
}
