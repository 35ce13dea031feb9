//! Recipe-suggestion agent wiring: the cart/stock tool, the agent declaration, and the hosts
//! that accept it.
//!
//! ```rust
//! use lagent::{AgentHost, StubAgentHost, root_agent};
//!
//! let agent = root_agent();
//! let mut host = StubAgentHost::new();
//! agent.install(&mut host).expect("install should succeed");
//!
//! assert_eq!(host.describe().tool_names(), vec!["get_cart_and_stock_info"]);
//! ```

mod config;
mod declaration;
mod error;
mod host;
mod prompt;
mod report;
mod suggestion;
mod tool;

pub mod prelude {
    pub use crate::{
        AgentConfig, AgentDeclaration, AgentError, AgentErrorKind, AgentHost, CartStockOutcome,
        CartStockReport, CartStockTool, HostKind, RecipeSuggestion, RuntimeAgentHost,
        StubAgentHost, get_cart_and_stock_info, root_agent,
    };
}

pub use config::{AgentConfig, DEFAULT_MODEL, HOST_ENV, HostKind, MODEL_ENV, parse_host_kind};
pub use declaration::{
    AGENT_DESCRIPTION, AGENT_INSTRUCTION, AGENT_NAME, AgentDeclaration, root_agent,
    root_agent_with,
};
pub use error::{AgentError, AgentErrorKind};
pub use host::{
    AgentHost, AgentHostHooks, HostDescription, NoopAgentHostHooks, RuntimeAgentHost,
    StubAgentHost,
};
pub use prompt::user_message;
pub use report::{CartStockOutcome, CartStockReport, get_cart_and_stock_info};
pub use suggestion::{
    MIN_SUGGESTIONS, RecipeSuggestion, SourcingViolation, check_sourcing, parse_suggestions,
    strip_code_fence,
};
pub use tool::{CART_ARGUMENT, CART_STOCK_TOOL_NAME, CartStockTool, STOCK_ARGUMENT};
