//! Closed-vocabulary allergen filter.
//!
//! The model's raw output is untrusted free text; nothing reaches the caller
//! unless it exactly matches the fixed allergen vocabulary after
//! case/whitespace normalization. Strict allow-list: no partial matches, no
//! fuzzy matches, and unexpected content is dropped silently.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// The nine canonical allergen labels. Process-wide, never mutated.
pub static ALLOWED_ALLERGENS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "milk",
        "egg",
        "peanut",
        "tree nut",
        "wheat",
        "soy",
        "fish",
        "shellfish",
        "sesame",
    ])
});

/// Rendered in place of an empty allergen list.
pub const EMPTY_MARKER: &str = "EMPTY";

/// Filter raw model text down to canonical allergen labels.
///
/// Lowercases the whole text, splits on commas, strips every whitespace
/// character inside each item, and keeps only exact vocabulary members.
/// Relative order is preserved and duplicates are kept.
pub fn filter_allergens(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    lowered
        .split(',')
        .filter_map(|item| {
            let cleaned: String = item.chars().filter(|c| !c.is_whitespace()).collect();
            if ALLOWED_ALLERGENS.contains(cleaned.as_str()) {
                Some(cleaned)
            } else {
                None
            }
        })
        .collect()
}

/// Comma-join kept labels with no surrounding spaces; `"EMPTY"` if none.
pub fn render_allergens(kept: &[String]) -> String {
    if kept.is_empty() {
        EMPTY_MARKER.to_string()
    } else {
        kept.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(raw: &str) -> String {
        render_allergens(&filter_allergens(raw))
    }

    #[test]
    fn mixed_output_keeps_only_vocabulary_members() {
        // Banana is dropped, case and spacing are normalized.
        assert_eq!(filtered("Milk, Egg, Banana, peanut\n"), "milk,egg,peanut");
    }

    #[test]
    fn no_matches_renders_empty_marker() {
        assert_eq!(filtered("banana, apple"), "EMPTY");
        assert_eq!(filtered(""), "EMPTY");
        assert_eq!(filtered("   \n  "), "EMPTY");
    }

    #[test]
    fn case_and_whitespace_invariance() {
        assert_eq!(filtered("Milk"), "milk");
        assert_eq!(filtered(" milk "), "milk");
        assert_eq!(filtered("MILK"), "milk");
        assert_eq!(filtered("\tsoy\n"), "soy");
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        assert_eq!(filtered("egg, milk, egg"), "egg,milk,egg");
    }

    #[test]
    fn filter_is_idempotent_on_its_own_output() {
        let once = filtered("Fish, Shrimp, shellfish, WHEAT");
        let twice = filtered(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn partial_matches_are_discarded() {
        assert_eq!(filtered("milks, peanut butter, egg"), "egg");
    }

    #[test]
    fn every_kept_item_is_in_the_fixed_set() {
        let kept = filter_allergens("soy, sesame, gluten, fish, rock");
        for item in &kept {
            assert!(ALLOWED_ALLERGENS.contains(item.as_str()));
        }
        assert_eq!(kept, vec!["soy", "sesame", "fish"]);
    }
}
