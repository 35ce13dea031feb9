//! Metrics-based hooks for tool runtime and host registration events.

use std::time::Duration;

use lagent::{AgentError, AgentHostHooks, HostKind};
use ltooling::{
    ToolCall, ToolDefinition, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "larder_tool_execution_start_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "larder_tool_execution_success_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "larder_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "larder_tool_execution_failure_total",
            "tool_name" => tool_call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "larder_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl AgentHostHooks for MetricsObservabilityHooks {
    fn on_tool_registered(&self, host: HostKind, definition: &ToolDefinition) {
        metrics::counter!(
            "larder_host_tool_registered_total",
            "host" => host.to_string(),
            "tool_name" => definition.name.clone()
        )
        .increment(1);
    }

    fn on_registration_failure(
        &self,
        host: HostKind,
        definition: &ToolDefinition,
        error: &AgentError,
    ) {
        metrics::counter!(
            "larder_host_registration_failure_total",
            "host" => host.to_string(),
            "tool_name" => definition.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
