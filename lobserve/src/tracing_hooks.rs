//! Tracing-based hooks for tool runtime and host registration events.
//!
//! ```rust
//! use lagent::AgentHostHooks;
//! use lobserve::TracingObservabilityHooks;
//!
//! fn accepts_host_hooks(_hooks: &dyn AgentHostHooks) {}
//!
//! accepts_host_hooks(&TracingObservabilityHooks);
//! ```

use std::time::Duration;

use lagent::{AgentError, AgentHostHooks, HostKind};
use ltooling::{
    ToolCall, ToolDefinition, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str())
        );
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "tool",
            event = "execution_success",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            output_bytes = result.output.len() as u64,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "tool",
            event = "execution_failure",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}

impl AgentHostHooks for TracingObservabilityHooks {
    fn on_tool_registered(&self, host: HostKind, definition: &ToolDefinition) {
        tracing::info!(
            phase = "host",
            event = "tool_registered",
            host = %host,
            tool_name = definition.name
        );
    }

    fn on_registration_failure(
        &self,
        host: HostKind,
        definition: &ToolDefinition,
        error: &AgentError,
    ) {
        tracing::warn!(
            phase = "host",
            event = "registration_failure",
            host = %host,
            tool_name = definition.name,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
