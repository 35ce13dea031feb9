//! Declaration of the recipe-suggestion agent and its single tool.
//!
//! The declaration is plain data. Building it performs no I/O; installing it hands its tools to
//! an [`AgentHost`](crate::AgentHost).
//!
//! ```rust
//! use lagent::{CART_STOCK_TOOL_NAME, root_agent};
//!
//! let agent = root_agent();
//! assert_eq!(agent.name, "ai_powered_recipe_suggestion_agent");
//! assert_eq!(agent.tool_definitions()[0].name, CART_STOCK_TOOL_NAME);
//! ```

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use ltooling::{Tool, ToolDefinition};

use crate::{AgentConfig, AgentError, AgentHost, CartStockTool};

pub const AGENT_NAME: &str = "ai_powered_recipe_suggestion_agent";

pub const AGENT_DESCRIPTION: &str = "An AI-powered agent that intelligently suggests new recipes \
based on items in a user's shopping cart and the available items in the e-shopping site's stock. \
The agent leverages its own knowledge of recipes to propose dishes and identifies additional \
items from stock needed to complete them, aiming to increase sales.";

pub const AGENT_INSTRUCTION: &str = concat!(
    "You are an expert culinary assistant and an e-commerce sales strategist. ",
    "Your goal is to suggest at least two delicious recipes that the user can make ",
    "by utilizing items they already have in their 'current_cart_items' and ",
    "by adding a few more ingredients from the 'available_stock_items' provided by the tool. ",
    "Do NOT use any predefined recipe lists. Instead, rely on your extensive culinary knowledge ",
    "to creatively combine ingredients. ",
    "Crucially, all 'extra_items_required' for a suggested dish MUST be present in the ",
    "'available_stock_items' and not already in the 'current_cart_items'. ",
    "You MUST provide your suggestions in the following JSON format:\n",
    "[\n",
    "  {\n",
    "    \"dish_name\": \"Name of the Recipe\",\n",
    "    \"extra_items_required\": [\"item1_from_stock\", \"item2_from_stock\"]\n",
    "  },\n",
    "  {\n",
    "    \"dish_name\": \"Another Recipe Name\",\n",
    "    \"extra_items_required\": [\"item_X_from_stock\", \"item_Y_from_stock\"]\n",
    "  }\n",
    "]\n",
    "Ensure that the 'extra_items_required' list only contains items that are actually needed ",
    "and can be found in the 'available_stock_items'. ",
    "When calling the 'get_cart_and_stock_info' tool, ensure that both 'present_cart_json' ",
    "and 'items_in_stock_json' arguments are provided as valid JSON string ",
    "representations of lists (e.g., '[\"apple\", \"banana\"]')."
);

#[derive(Clone)]
pub struct AgentDeclaration {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl AgentDeclaration {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            description: description.into(),
            instruction: instruction.into(),
            tools: Vec::new(),
        }
    }

    pub fn with_tool<T>(mut self, tool: T) -> Self
    where
        T: Tool + 'static,
    {
        self.tools.push(Arc::new(tool));
        self
    }

    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| tool.definition()).collect()
    }

    /// Registers every declared tool with `host`, stopping at the first rejection.
    pub fn install(&self, host: &mut dyn AgentHost) -> Result<(), AgentError> {
        for tool in &self.tools {
            host.register(Arc::clone(tool))?;
        }
        Ok(())
    }
}

impl Debug for AgentDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tools: Vec<String> = self
            .tools
            .iter()
            .map(|tool| tool.definition().name)
            .collect();

        f.debug_struct("AgentDeclaration")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("description", &self.description)
            .field("tools", &tools)
            .finish_non_exhaustive()
    }
}

impl Display for AgentDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Agent(name='{}', model='{}', tools={})",
            self.name,
            self.model,
            self.tools.len()
        )
    }
}

/// Builds the recipe agent with default configuration.
pub fn root_agent() -> AgentDeclaration {
    root_agent_with(&AgentConfig::default())
}

pub fn root_agent_with(config: &AgentConfig) -> AgentDeclaration {
    AgentDeclaration::new(
        AGENT_NAME,
        config.model.clone(),
        AGENT_DESCRIPTION,
        AGENT_INSTRUCTION,
    )
    .with_tool(CartStockTool::new())
}
