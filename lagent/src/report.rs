//! Cart and stock reporting handed to the recipe agent.
//!
//! The agent runtime passes both lists as JSON text. They are parsed for well-formedness only
//! and echoed back under fixed keys so the model can reason over them. Malformed input never
//! escapes as an error: it becomes an `error` outcome the model can read. Numbers keep their
//! exact digits and nesting depth is bounded only by the heap.
//!
//! ```rust
//! use lagent::{CartStockOutcome, get_cart_and_stock_info};
//!
//! let outcome = get_cart_and_stock_info(r#"["pasta"]"#, r#"["garlic"]"#);
//! assert!(outcome.is_success());
//!
//! let outcome = get_cart_and_stock_info("not a valid json list", "[]");
//! assert!(matches!(outcome, CartStockOutcome::Error { .. }));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed cart and stock values, serialized cart first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartStockReport {
    pub current_cart_items: Value,
    pub available_stock_items: Value,
}

impl CartStockReport {
    pub fn parse(cart_json: &str, stock_json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            current_cart_items: parse_unbounded(cart_json)?,
            available_stock_items: parse_unbounded(stock_json)?,
        })
    }

    /// Two-space indented rendering read by the model.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Parses one JSON document without serde_json's nesting limit, growing the stack on demand.
fn parse_unbounded(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CartStockOutcome {
    Success { report: String },
    Error { error_message: String },
}

impl CartStockOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            Self::Success { report } => Some(report),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_message } => Some(error_message),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Parses both lists and echoes them back as a report.
///
/// Element types are not checked and nothing is deduplicated; only JSON syntax matters.
pub fn get_cart_and_stock_info(cart_json: &str, stock_json: &str) -> CartStockOutcome {
    let report = match CartStockReport::parse(cart_json, stock_json) {
        Ok(report) => report,
        Err(err) => {
            return CartStockOutcome::Error {
                error_message: format!(
                    "Invalid JSON format provided for cart or stock: {err}. \
                     Please ensure inputs are valid JSON list strings."
                ),
            };
        }
    };

    match report.to_pretty_json() {
        Ok(report) => CartStockOutcome::Success { report },
        Err(err) => CartStockOutcome::Error {
            error_message: format!("An unexpected error occurred during input parsing: {err}"),
        },
    }
}
