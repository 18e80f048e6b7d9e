//! Naming utilities for schema_naming
//!
//! Case conversions and small string helpers shared by the naming strategies.

use inflector::Inflector;

/// Separator placed between logical names before case conversion
pub const WORD_SEPARATOR: &str = "_";

/// Split a compound name into words
///
/// Any character that is not alphanumeric separates words. Inside a run,
/// a new word starts at a digit/letter boundary, at a lower-to-upper
/// transition, and before the last capital of an acronym that is followed
/// by a lower-case letter (`HTTPServer` is `HTTP`, `Server`).
pub fn split_into_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).map_or(false, |next| next.is_lowercase());
            let boundary = prev.is_numeric() != c.is_numeric()
                || (!prev.is_uppercase() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);

            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert a logical name to lower-case, underscore-delimited words
pub fn snake_case(name: &str) -> String {
    split_into_words(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

/// Convert a logical name to compact camel case
///
/// Every word is lower-cased first, so acronyms become `Uuid`, not `UUID`.
pub fn camel_case(name: &str) -> String {
    split_into_words(name)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let word = word.to_lowercase();
            if i == 0 {
                word
            } else {
                word.to_pascal_case()
            }
        })
        .collect()
}

/// Join parts with the word separator without any case conversion
pub fn combine_names(parts: &[&str]) -> String {
    parts.join(WORD_SEPARATOR)
}

/// Join parts with the word separator, then convert to camel case
pub fn camel_join(parts: &[&str]) -> String {
    camel_case(&combine_names(parts))
}

/// Join parts with the word separator, then convert to snake case
pub fn snake_join(parts: &[&str]) -> String {
    snake_case(&combine_names(parts))
}

/// Treat an empty override the same as an absent one
pub fn non_empty(custom_name: Option<&str>) -> Option<&str> {
    custom_name.filter(|name| !name.is_empty())
}

/// Keep at most `max_chars` characters of `value`
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
