use std::sync::Arc;

use ltooling::{
    DefaultToolRuntime, NoopToolRuntimeHooks, Tool, ToolRegistry, ToolRuntime, ToolRuntimeHooks,
};

use super::{AgentHost, AgentHostHooks, HostDescription, NoopAgentHostHooks, duplicate_tool};
use crate::{AgentError, HostKind};

/// Host backed by the in-process tool registry and runtime.
pub struct RuntimeAgentHost {
    registry: ToolRegistry,
    tool_hooks: Arc<dyn ToolRuntimeHooks>,
    host_hooks: Arc<dyn AgentHostHooks>,
}

impl Default for RuntimeAgentHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeAgentHost {
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
            tool_hooks: Arc::new(NoopToolRuntimeHooks),
            host_hooks: Arc::new(NoopAgentHostHooks),
        }
    }

    pub fn with_tool_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.tool_hooks = hooks;
        self
    }

    pub fn with_host_hooks(mut self, hooks: Arc<dyn AgentHostHooks>) -> Self {
        self.host_hooks = hooks;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Snapshot runtime over the tools registered so far.
    pub fn runtime(&self) -> DefaultToolRuntime {
        DefaultToolRuntime::new(Arc::new(self.registry.clone()))
            .with_hooks(Arc::clone(&self.tool_hooks))
    }
}

impl AgentHost for RuntimeAgentHost {
    fn kind(&self) -> HostKind {
        HostKind::Runtime
    }

    fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), AgentError> {
        let definition = tool.definition();
        if self.registry.contains(&definition.name) {
            let error = duplicate_tool(self.kind(), &definition.name);
            self.host_hooks
                .on_registration_failure(self.kind(), &definition, &error);
            return Err(error);
        }

        self.registry.register_shared(tool);
        self.host_hooks.on_tool_registered(self.kind(), &definition);
        Ok(())
    }

    fn describe(&self) -> HostDescription {
        HostDescription {
            kind: self.kind(),
            tools: self.registry.definitions(),
        }
    }

    fn tool_runtime(&self) -> Option<Arc<dyn ToolRuntime>> {
        Some(Arc::new(self.runtime()))
    }
}

#[cfg(test)]
mod tests {
    use ltooling::{ToolCall, ToolExecutionContext};

    use super::*;
    use crate::{AgentErrorKind, CartStockOutcome, CartStockTool, root_agent};

    #[test]
    fn install_registers_declared_tool() {
        let mut host = RuntimeAgentHost::new();
        root_agent().install(&mut host).expect("install should succeed");

        let description = host.describe();
        assert_eq!(description.kind, HostKind::Runtime);
        assert_eq!(description.tool_names(), vec!["get_cart_and_stock_info"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut host = RuntimeAgentHost::new();
        host.register(Arc::new(CartStockTool)).expect("first register");

        let error = host
            .register(Arc::new(CartStockTool))
            .expect_err("second register should fail");
        assert_eq!(error.kind, AgentErrorKind::Registration);
        assert_eq!(host.registry().len(), 1);
    }

    #[tokio::test]
    async fn runtime_executes_registered_cart_stock_tool() {
        let mut host = RuntimeAgentHost::new();
        root_agent().install(&mut host).expect("install should succeed");
        let runtime = host.tool_runtime().expect("runtime host exposes a runtime");

        let result = runtime
            .execute(
                ToolCall::new(
                    "call_1",
                    "get_cart_and_stock_info",
                    r#"{"present_cart_json":"[\"eggs\"]","items_in_stock_json":"[\"eggs\"]"}"#,
                ),
                ToolExecutionContext::new("session-1"),
            )
            .await
            .expect("tool call should succeed");

        let outcome: CartStockOutcome = serde_json::from_str(&result.output).expect("outcome");
        assert!(outcome.is_success());
    }
}
