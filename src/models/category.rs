//! Expense category labels
//!
//! Categories are free-form strings on an expense. The advisor prefers this
//! fixed label set and falls back to a single word outside it.

/// Labels the category advisor is asked to choose from
pub const KNOWN_CATEGORIES: [&str; 10] = [
    "Food",
    "Transport",
    "Utilities",
    "Rent",
    "Health",
    "Entertainment",
    "Shopping",
    "Education",
    "Groceries",
    "Other",
];

/// Maximum accepted category length, in characters
pub const MAX_CATEGORY_LEN: usize = 50;

/// Find the canonical known label for a candidate, ignoring case
pub fn canonical_label(candidate: &str) -> Option<&'static str> {
    let candidate = candidate.trim();
    KNOWN_CATEGORIES
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(candidate))
}

/// Title-case a single word ("groceries" -> "Groceries")
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label() {
        assert_eq!(canonical_label("food"), Some("Food"));
        assert_eq!(canonical_label(" GROCERIES "), Some("Groceries"));
        assert_eq!(canonical_label("Travel"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("travel"), "Travel");
        assert_eq!(title_case("PETS"), "Pets");
        assert_eq!(title_case(""), "");
    }
}
