//! Agent host seam: where declared tools are handed to an agent runtime.
//!
//! Two hosts ship with the crate. [`RuntimeAgentHost`] installs tools into a
//! [`ToolRegistry`](ltooling::ToolRegistry) and can execute calls through the registry-backed
//! runtime. [`StubAgentHost`] only records what was registered, for tests and demos.

mod runtime;
mod stub;

use std::sync::Arc;

use serde::Serialize;

use ltooling::{Tool, ToolDefinition, ToolRuntime};

use crate::{AgentError, HostKind};

pub use runtime::RuntimeAgentHost;
pub use stub::StubAgentHost;

pub trait AgentHost: Send + Sync {
    fn kind(&self) -> HostKind;

    /// Makes `tool` callable by the agent. Tool names are unique per host.
    fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), AgentError>;

    fn describe(&self) -> HostDescription;

    /// Executor for tool calls, when the host can run them in-process.
    fn tool_runtime(&self) -> Option<Arc<dyn ToolRuntime>> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostDescription {
    pub kind: HostKind,
    pub tools: Vec<ToolDefinition>,
}

impl HostDescription {
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }
}

pub trait AgentHostHooks: Send + Sync {
    fn on_tool_registered(&self, _host: HostKind, _definition: &ToolDefinition) {}

    fn on_registration_failure(
        &self,
        _host: HostKind,
        _definition: &ToolDefinition,
        _error: &AgentError,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAgentHostHooks;

impl AgentHostHooks for NoopAgentHostHooks {}

fn duplicate_tool(host: HostKind, name: &str) -> AgentError {
    AgentError::registration(format!(
        "tool '{name}' is already registered with the {host} host"
    ))
}
