use std::sync::Arc;

use ltooling::Tool;

use super::{AgentHost, AgentHostHooks, HostDescription, NoopAgentHostHooks, duplicate_tool};
use crate::{AgentError, HostKind};

/// Records registrations without wiring them to any runtime.
pub struct StubAgentHost {
    tools: Vec<Arc<dyn Tool>>,
    hooks: Arc<dyn AgentHostHooks>,
}

impl Default for StubAgentHost {
    fn default() -> Self {
        Self::new()
    }
}

impl StubAgentHost {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            hooks: Arc::new(NoopAgentHostHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn AgentHostHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }
}

impl AgentHost for StubAgentHost {
    fn kind(&self) -> HostKind {
        HostKind::Stub
    }

    fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), AgentError> {
        let definition = tool.definition();
        if self
            .tools
            .iter()
            .any(|existing| existing.definition().name == definition.name)
        {
            let error = duplicate_tool(self.kind(), &definition.name);
            self.hooks
                .on_registration_failure(self.kind(), &definition, &error);
            return Err(error);
        }

        self.tools.push(tool);
        self.hooks.on_tool_registered(self.kind(), &definition);
        Ok(())
    }

    fn describe(&self) -> HostDescription {
        HostDescription {
            kind: self.kind(),
            tools: self.tools.iter().map(|tool| tool.definition()).collect(),
        }
    }
}
