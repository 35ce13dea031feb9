//! Wrappers that keep a panicking hook from taking down a tool call or registration.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use lagent::{AgentError, AgentHostHooks, HostKind};
use ltooling::{
    ToolCall, ToolDefinition, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

pub struct SafeToolHooks<H> {
    inner: H,
}

impl<H> SafeToolHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolRuntimeHooks for SafeToolHooks<H>
where
    H: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_execution_start(tool_call, context)
        }));
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_success(tool_call, context, result, elapsed)
        }));
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_failure(tool_call, context, error, elapsed)
        }));
    }
}

pub struct SafeHostHooks<H> {
    inner: H,
}

impl<H> SafeHostHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> AgentHostHooks for SafeHostHooks<H>
where
    H: AgentHostHooks,
{
    fn on_tool_registered(&self, host: HostKind, definition: &ToolDefinition) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_tool_registered(host, definition)
        }));
    }

    fn on_registration_failure(
        &self,
        host: HostKind,
        definition: &ToolDefinition,
        error: &AgentError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_registration_failure(host, definition, error)
        }));
    }
}
