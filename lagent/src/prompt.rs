//! User message sent to the agent when a shopper asks for suggestions.

use std::fmt::Display;

use serde_json::Value;

/// Formats the cart and stock names the way the agent expects to receive them.
pub fn user_message(user_id: impl Display, cart_items: &[String], stock_items: &[String]) -> String {
    format!(
        "user_id: {user_id}\npresent_cart_json: {}\nitems_in_stock_json: {}",
        Value::from(cart_items.to_vec()),
        Value::from(stock_items.to_vec()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_cart_and_stock_info;

    #[test]
    fn message_embeds_compact_json_lists() {
        let message = user_message(
            42,
            &["pasta".to_string(), "eggs".to_string()],
            &["garlic".to_string()],
        );

        assert_eq!(
            message,
            "user_id: 42\npresent_cart_json: [\"pasta\",\"eggs\"]\nitems_in_stock_json: [\"garlic\"]"
        );
    }

    #[test]
    fn embedded_lists_are_accepted_by_the_tool() {
        let message = user_message("u1", &["say \"cheese\"".to_string()], &[]);
        let mut lines = message.lines().skip(1);
        let cart = lines
            .next()
            .and_then(|line| line.strip_prefix("present_cart_json: "))
            .expect("cart line");
        let stock = lines
            .next()
            .and_then(|line| line.strip_prefix("items_in_stock_json: "))
            .expect("stock line");

        assert!(get_cart_and_stock_info(cart, stock).is_success());
    }
}
