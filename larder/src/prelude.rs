//! Common imports for larder applications.

pub use crate::{AgentBundle, bootstrap, build_host};
pub use crate::{
    AgentConfig, AgentDeclaration, AgentError, AgentHost, CartStockOutcome, HostKind, ToolCall,
    ToolExecutionContext, ToolRuntime, get_cart_and_stock_info, root_agent, root_agent_with,
};
