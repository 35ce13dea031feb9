//! Forwards every hook callback to two hook sets in order.

use std::time::Duration;

use lagent::{AgentError, AgentHostHooks, HostKind};
use ltooling::{
    ToolCall, ToolDefinition, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FanoutHooks<A, B> {
    first: A,
    second: B,
}

impl<A, B> FanoutHooks<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> ToolRuntimeHooks for FanoutHooks<A, B>
where
    A: ToolRuntimeHooks,
    B: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        self.first.on_execution_start(tool_call, context);
        self.second.on_execution_start(tool_call, context);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        self.first
            .on_execution_success(tool_call, context, result, elapsed);
        self.second
            .on_execution_success(tool_call, context, result, elapsed);
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        self.first
            .on_execution_failure(tool_call, context, error, elapsed);
        self.second
            .on_execution_failure(tool_call, context, error, elapsed);
    }
}

impl<A, B> AgentHostHooks for FanoutHooks<A, B>
where
    A: AgentHostHooks,
    B: AgentHostHooks,
{
    fn on_tool_registered(&self, host: HostKind, definition: &ToolDefinition) {
        self.first.on_tool_registered(host, definition);
        self.second.on_tool_registered(host, definition);
    }

    fn on_registration_failure(
        &self,
        host: HostKind,
        definition: &ToolDefinition,
        error: &AgentError,
    ) {
        self.first.on_registration_failure(host, definition, error);
        self.second.on_registration_failure(host, definition, error);
    }
}
