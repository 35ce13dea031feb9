//! Unified facade over the larder workspace crates.
//!
//! Most applications only need [`bootstrap`]: it builds the recipe agent declaration from an
//! [`AgentConfig`], picks the configured host, and installs the agent's tool with tracing and
//! metrics hooks attached.

pub mod prelude;
pub mod runtime;

pub use lagent;
pub use lcommon;
pub use lobserve;
pub use ltooling;

pub use lagent::{
    AGENT_DESCRIPTION, AGENT_INSTRUCTION, AGENT_NAME, AgentConfig, AgentDeclaration, AgentError,
    AgentErrorKind, AgentHost, AgentHostHooks, CART_ARGUMENT, CART_STOCK_TOOL_NAME,
    CartStockOutcome, CartStockReport, CartStockTool, DEFAULT_MODEL, HostDescription, HostKind,
    RecipeSuggestion, RuntimeAgentHost, STOCK_ARGUMENT, SourcingViolation, StubAgentHost,
    check_sourcing, get_cart_and_stock_info, parse_host_kind, parse_suggestions, root_agent,
    root_agent_with, user_message,
};
pub use lcommon::{SessionId, TraceId};
pub use lobserve::{
    FanoutHooks, MetricsObservabilityHooks, SafeHostHooks, SafeToolHooks,
    TracingObservabilityHooks,
};
pub use ltooling::{
    DefaultToolRuntime, Tool, ToolCall, ToolDefinition, ToolError, ToolErrorKind,
    ToolExecutionContext, ToolExecutionResult, ToolRuntime, ToolRuntimeHooks,
};

pub use runtime::{AgentBundle, bootstrap, build_host, observed_host_hooks, observed_tool_hooks};
