//! Exposes the cart/stock report as a runtime-callable tool.

use serde_json::json;

use ltooling::{
    Tool, ToolDefinition, ToolError, ToolExecutionContext, ToolFuture, parse_json_object,
    required_string,
};

use crate::get_cart_and_stock_info;

pub const CART_STOCK_TOOL_NAME: &str = "get_cart_and_stock_info";
pub const CART_ARGUMENT: &str = "present_cart_json";
pub const STOCK_ARGUMENT: &str = "items_in_stock_json";

#[derive(Debug, Default, Clone, Copy)]
pub struct CartStockTool;

impl CartStockTool {
    pub fn new() -> Self {
        Self
    }

    fn input_schema() -> String {
        json!({
            "type": "object",
            "properties": {
                CART_ARGUMENT: {
                    "type": "string",
                    "description": "JSON list of the items currently in the user's cart, e.g. '[\"itemA\", \"itemB\"]'."
                },
                STOCK_ARGUMENT: {
                    "type": "string",
                    "description": "JSON list of every item available in the shop's stock, e.g. '[\"itemX\", \"itemY\"]'."
                }
            },
            "required": [CART_ARGUMENT, STOCK_ARGUMENT]
        })
        .to_string()
    }

    /// Runs the report for a raw arguments object.
    ///
    /// Only a malformed arguments envelope is a [`ToolError`]; malformed cart or stock text is
    /// reported back to the model as an `error` outcome.
    pub fn call(&self, args_json: &str) -> Result<String, ToolError> {
        let args = parse_json_object(args_json)?;
        let cart_json = required_string(&args, CART_ARGUMENT)?;
        let stock_json = required_string(&args, STOCK_ARGUMENT)?;

        get_cart_and_stock_info(&cart_json, &stock_json)
            .to_json()
            .map_err(|err| ToolError::execution(format!("failed to encode tool outcome: {err}")))
    }
}

impl Tool for CartStockTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            CART_STOCK_TOOL_NAME,
            "Provides the current cart items and available stock items so recipes can be \
             suggested from them.",
            Self::input_schema(),
        )
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        let output = self.call(args_json);
        Box::pin(async move { output })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use ltooling::ToolErrorKind;

    use super::*;
    use crate::CartStockOutcome;

    fn arguments(cart: &str, stock: &str) -> String {
        json!({ CART_ARGUMENT: cart, STOCK_ARGUMENT: stock }).to_string()
    }

    #[test]
    fn definition_declares_both_string_arguments() {
        let definition = CartStockTool.definition();
        assert_eq!(definition.name, "get_cart_and_stock_info");

        let schema: Value = serde_json::from_str(&definition.input_schema).expect("schema json");
        assert_eq!(schema["required"], json!(["present_cart_json", "items_in_stock_json"]));
        assert_eq!(schema["properties"]["present_cart_json"]["type"], "string");
        assert_eq!(schema["properties"]["items_in_stock_json"]["type"], "string");
    }

    #[test]
    fn call_returns_success_outcome_json() {
        let output = CartStockTool
            .call(&arguments(r#"["chicken breast"]"#, r#"["rice","broccoli"]"#))
            .expect("call should succeed");

        let outcome: CartStockOutcome = serde_json::from_str(&output).expect("outcome json");
        assert!(outcome.is_success());
    }

    #[test]
    fn malformed_list_is_an_outcome_not_a_tool_error() {
        let output = CartStockTool
            .call(&arguments("not a valid json list", r#"["milk"]"#))
            .expect("call should still succeed");

        let value: Value = serde_json::from_str(&output).expect("outcome json");
        assert_eq!(value["status"], "error");
        assert!(value["error_message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[test]
    fn missing_argument_is_invalid_arguments() {
        let error = CartStockTool
            .call(r#"{"present_cart_json":"[]"}"#)
            .expect_err("stock argument is required");

        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
        assert!(error.message.contains(STOCK_ARGUMENT));
    }

    #[tokio::test]
    async fn invoke_matches_call() {
        let args = arguments("[]", "[]");
        let context = ToolExecutionContext::new("session-1");

        let invoked = CartStockTool
            .invoke(&args, &context)
            .await
            .expect("invoke should succeed");
        assert_eq!(Ok(invoked), CartStockTool.call(&args));
    }
}
