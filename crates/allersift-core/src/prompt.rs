//! Fixed instruction template for allergen detection.
//!
//! The wording is deliberately frozen: the decode loop's newline stop and
//! the downstream filter both assume the model was asked for a single
//! comma-separated line drawn from the allowed vocabulary.

/// Build the allergen-detection prompt for one ingredients listing.
pub fn build_allergen_prompt(ingredients: &str) -> String {
    format!(
        "Task: Detect food allergens.\n\
         \n\
         Ingredients:\n\
         {ingredients}\n\
         \n\
         Allowed allergens:\n\
         milk, egg, peanut, tree nut, wheat, soy, fish, shellfish, sesame\n\
         \n\
         Rules:\n\
         - Output ONLY a comma-separated list of allergens.\n\
         - If none are present, output EMPTY."
    )
}
