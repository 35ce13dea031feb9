//! Tool runtime trait and default registry-backed executor.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    NoopToolRuntimeHooks, ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolRegistry, ToolRuntimeHooks,
};

pub trait ToolRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>>;
}

#[derive(Clone)]
pub struct DefaultToolRuntime {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolRuntimeHooks>,
}

impl Default for DefaultToolRuntime {
    fn default() -> Self {
        Self::new(Arc::new(ToolRegistry::new()))
    }
}

impl DefaultToolRuntime {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }
}

impl ToolRuntime for DefaultToolRuntime {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>> {
        Box::pin(async move {
            let started = Instant::now();
            self.hooks.on_execution_start(&tool_call, &context);

            let outcome = match self.registry.get(&tool_call.name) {
                Some(tool) => tool.invoke(&tool_call.arguments, &context).await,
                None => Err(ToolError::not_found(format!(
                    "tool '{}' is not registered",
                    tool_call.name
                ))),
            };

            match outcome {
                Ok(output) => {
                    let result = ToolExecutionResult::from_call(&tool_call, output);
                    self.hooks
                        .on_execution_success(&tool_call, &context, &result, started.elapsed());
                    Ok(result)
                }
                Err(error) => {
                    let error = error
                        .with_tool_name(tool_call.name.clone())
                        .with_tool_call_id(tool_call.id.clone());
                    self.hooks
                        .on_execution_failure(&tool_call, &context, &error, started.elapsed());
                    Err(error)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::{Tool, ToolDefinition, ToolErrorKind};

    #[derive(Debug)]
    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("echo", "Echoes arguments", "{\"type\":\"string\"}")
        }

        fn invoke<'a>(
            &'a self,
            args_json: &'a str,
            context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move { Ok(format!("session={} args={}", context.session_id, args_json)) })
        }
    }

    #[derive(Debug)]
    struct BrokenTool;

    impl Tool for BrokenTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("broken", "Always fails", "{\"type\":\"object\"}")
        }

        fn invoke<'a>(
            &'a self,
            _args_json: &'a str,
            _context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move { Err(ToolError::execution("tool exploded")) })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<&'static str>>,
    }

    impl ToolRuntimeHooks for RecordingHooks {
        fn on_execution_start(&self, _tool_call: &ToolCall, _context: &ToolExecutionContext) {
            self.events.lock().expect("events lock").push("start");
        }

        fn on_execution_success(
            &self,
            _tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            _result: &ToolExecutionResult,
            _elapsed: Duration,
        ) {
            self.events.lock().expect("events lock").push("success");
        }

        fn on_execution_failure(
            &self,
            _tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            _error: &ToolError,
            _elapsed: Duration,
        ) {
            self.events.lock().expect("events lock").push("failure");
        }
    }

    fn runtime_with(tools: Vec<Arc<dyn Tool>>) -> DefaultToolRuntime {
        let mut registry = ToolRegistry::new();
        for tool in tools {
            registry.register_shared(tool);
        }
        DefaultToolRuntime::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn runtime_executes_registered_tool() {
        let runtime = runtime_with(vec![Arc::new(EchoTool)]);

        let result = runtime
            .execute(
                ToolCall::new("call_1", "echo", "hello"),
                ToolExecutionContext::new("session-1"),
            )
            .await
            .expect("execution should succeed");

        assert_eq!(result.tool_call_id, "call_1");
        assert_eq!(result.tool_name, "echo");
        assert_eq!(result.output, "session=session-1 args=hello");
    }

    #[tokio::test]
    async fn runtime_returns_not_found_with_call_context() {
        let runtime = DefaultToolRuntime::default();

        let error = runtime
            .execute(
                ToolCall::new("call_2", "missing", "{}"),
                ToolExecutionContext::new("session-2"),
            )
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, ToolErrorKind::NotFound);
        assert_eq!(error.tool_name.as_deref(), Some("missing"));
        assert_eq!(error.tool_call_id.as_deref(), Some("call_2"));
    }

    #[tokio::test]
    async fn runtime_reports_lifecycle_to_hooks() {
        let hooks = Arc::new(RecordingHooks::default());
        let runtime = runtime_with(vec![Arc::new(EchoTool), Arc::new(BrokenTool)])
            .with_hooks(hooks.clone());
        let context = ToolExecutionContext::new("session-3");

        runtime
            .execute(ToolCall::new("call_3", "echo", "{}"), context.clone())
            .await
            .expect("echo should succeed");
        let error = runtime
            .execute(ToolCall::new("call_4", "broken", "{}"), context)
            .await
            .expect_err("broken should fail");

        assert_eq!(error.kind, ToolErrorKind::Execution);
        assert_eq!(error.message, "tool exploded");
        assert_eq!(
            *hooks.events.lock().expect("events lock"),
            vec!["start", "success", "start", "failure"]
        );
    }

    #[test]
    fn registry_tracks_registered_tools() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register(EchoTool).is_none());
        assert!(registry.register(EchoTool).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("echo"));

        registry.register_sync_fn(
            ToolDefinition::new("noop", "Does nothing", "{}"),
            |_args, _ctx| Ok(String::new()),
        );
        let names: Vec<_> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["echo".to_string(), "noop".to_string()]);

        assert!(registry.remove("echo").is_some());
        assert_eq!(registry.len(), 1);
    }
}
