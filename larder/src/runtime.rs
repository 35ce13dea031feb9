//! Host selection and agent installation.

use std::sync::Arc;

use crate::{
    AgentConfig, AgentDeclaration, AgentError, AgentHost, AgentHostHooks, FanoutHooks, HostKind,
    MetricsObservabilityHooks, RuntimeAgentHost, SafeHostHooks, SafeToolHooks, StubAgentHost,
    ToolRuntime, ToolRuntimeHooks, TracingObservabilityHooks, root_agent_with,
};

pub struct AgentBundle {
    pub declaration: AgentDeclaration,
    pub host: Box<dyn AgentHost>,
}

impl AgentBundle {
    pub fn tool_runtime(&self) -> Option<Arc<dyn ToolRuntime>> {
        self.host.tool_runtime()
    }
}

/// Tracing spans and `larder_*` metrics for tool calls. Metrics go to whatever recorder the
/// process installed and are dropped when none is.
pub fn observed_tool_hooks() -> Arc<dyn ToolRuntimeHooks> {
    Arc::new(FanoutHooks::new(
        SafeToolHooks::new(TracingObservabilityHooks),
        SafeToolHooks::new(MetricsObservabilityHooks),
    ))
}

pub fn observed_host_hooks() -> Arc<dyn AgentHostHooks> {
    Arc::new(FanoutHooks::new(
        SafeHostHooks::new(TracingObservabilityHooks),
        SafeHostHooks::new(MetricsObservabilityHooks),
    ))
}

pub fn build_host(
    kind: HostKind,
    tool_hooks: Arc<dyn ToolRuntimeHooks>,
    host_hooks: Arc<dyn AgentHostHooks>,
) -> Box<dyn AgentHost> {
    match kind {
        HostKind::Runtime => Box::new(
            RuntimeAgentHost::new()
                .with_tool_hooks(tool_hooks)
                .with_host_hooks(host_hooks),
        ),
        HostKind::Stub => Box::new(StubAgentHost::new().with_hooks(host_hooks)),
    }
}

/// Declares the recipe agent for `config` and installs it into the configured host.
pub fn bootstrap(config: &AgentConfig) -> Result<AgentBundle, AgentError> {
    let declaration = root_agent_with(config);
    let mut host = build_host(config.host, observed_tool_hooks(), observed_host_hooks());
    declaration.install(host.as_mut())?;

    tracing::debug!(
        agent = %declaration,
        host = %config.host,
        "recipe agent installed"
    );

    Ok(AgentBundle { declaration, host })
}
