//! Recipe suggestions returned by the agent and advisory checks over them.
//!
//! The model answers with a JSON array of dishes, frequently wrapped in a Markdown code fence.
//!
//! ```rust
//! use lagent::parse_suggestions;
//!
//! let text = "```json\n[{\"dish_name\":\"Carbonara\",\"extra_items_required\":[\"cheese\"]}]\n```";
//! let suggestions = parse_suggestions(text).expect("suggestions should parse");
//! assert_eq!(suggestions[0].dish_name, "Carbonara");
//! ```

use serde::{Deserialize, Serialize};

use crate::AgentError;

pub const MIN_SUGGESTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub dish_name: String,
    #[serde(default)]
    pub extra_items_required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcingViolation {
    TooFewDishes { count: usize },
    NotInStock { dish_name: String, item: String },
    AlreadyInCart { dish_name: String, item: String },
}

/// Removes a surrounding ```` ```json ```` (or bare ```` ``` ````) fence.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    body.strip_suffix("```").unwrap_or(body).trim()
}

pub fn parse_suggestions(text: &str) -> Result<Vec<RecipeSuggestion>, AgentError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|err| AgentError::suggestion(format!("failed to parse recipe suggestions: {err}")))
}

/// Lists every place the suggestions break the rules given to the model.
///
/// Extra items must come from stock and must not already be in the cart. Nothing is rejected
/// here; callers decide what to do with the findings.
pub fn check_sourcing(
    suggestions: &[RecipeSuggestion],
    cart: &[String],
    stock: &[String],
) -> Vec<SourcingViolation> {
    let mut violations = Vec::new();

    if suggestions.len() < MIN_SUGGESTIONS {
        violations.push(SourcingViolation::TooFewDishes {
            count: suggestions.len(),
        });
    }

    for suggestion in suggestions {
        for item in &suggestion.extra_items_required {
            if !stock.contains(item) {
                violations.push(SourcingViolation::NotInStock {
                    dish_name: suggestion.dish_name.clone(),
                    item: item.clone(),
                });
            }
            if cart.contains(item) {
                violations.push(SourcingViolation::AlreadyInCart {
                    dish_name: suggestion.dish_name.clone(),
                    item: item.clone(),
                });
            }
        }
    }

    violations
}
