//! Prompt construction and label normalization for category suggestions

use crate::models::category::{canonical_label, title_case, MAX_CATEGORY_LEN, KNOWN_CATEGORIES};
use crate::models::expense::MAX_DESCRIPTION_LEN;

use super::AdvisorError;

/// Cut a description to at most `MAX_DESCRIPTION_LEN` characters
pub fn truncate_description(description: &str) -> &str {
    let description = description.trim();
    match description.char_indices().nth(MAX_DESCRIPTION_LEN) {
        Some((idx, _)) => &description[..idx],
        None => description,
    }
}

/// Build the instruction sent to the model
pub fn build_prompt(description: &str) -> String {
    format!(
        "You are an expert financial assistant. Based on the following expense \
         description, suggest a single, relevant category.\n\n\
         Description: {}\n\n\
         Choose from one of the following categories if applicable, otherwise \
         provide a suitable one-word category:\n{}.",
        truncate_description(description),
        KNOWN_CATEGORIES.join(", ")
    )
}

/// Turn whatever the model returned into a single category word
///
/// Known labels come back in canonical spelling. Anything else is kept as a
/// title-cased single word. Multi-word answers keep only the first word.
pub fn normalize_category(raw: &str) -> Result<String, AdvisorError> {
    let first_word = raw
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|word| !word.is_empty())
        .ok_or_else(|| AdvisorError::MalformedResponse(format!("empty category: {:?}", raw)))?;

    if first_word.chars().count() > MAX_CATEGORY_LEN {
        return Err(AdvisorError::MalformedResponse(format!(
            "category longer than {} characters",
            MAX_CATEGORY_LEN
        )));
    }

    Ok(match canonical_label(first_word) {
        Some(label) => label.to_string(),
        None => title_case(first_word),
    })
}
