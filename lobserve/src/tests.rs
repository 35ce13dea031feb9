use std::sync::{Arc, Mutex};
use std::time::Duration;

use lagent::{AgentError, AgentHost, AgentHostHooks, HostKind, StubAgentHost, root_agent};
use ltooling::{
    ToolCall, ToolDefinition, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

use crate::{
    FanoutHooks, MetricsObservabilityHooks, SafeHostHooks, SafeToolHooks,
    TracingObservabilityHooks,
};

fn sample_tool_call() -> ToolCall {
    ToolCall::new("call-1", "get_cart_and_stock_info", "{}")
}

fn sample_tool_context() -> ToolExecutionContext {
    ToolExecutionContext::new("session-1").with_trace_id("trace-1")
}

fn sample_definition() -> ToolDefinition {
    ToolDefinition::new("get_cart_and_stock_info", "cart and stock", "{}")
}

fn exercise_tool_hooks(hooks: &dyn ToolRuntimeHooks) {
    hooks.on_execution_start(&sample_tool_call(), &sample_tool_context());
    hooks.on_execution_success(
        &sample_tool_call(),
        &sample_tool_context(),
        &ToolExecutionResult::new("call-1", "get_cart_and_stock_info", "{}"),
        Duration::from_millis(2),
    );
    hooks.on_execution_failure(
        &sample_tool_call(),
        &sample_tool_context(),
        &ToolError::invalid_arguments("missing required string"),
        Duration::from_millis(2),
    );
}

fn exercise_host_hooks(hooks: &dyn AgentHostHooks) {
    hooks.on_tool_registered(HostKind::Runtime, &sample_definition());
    hooks.on_registration_failure(
        HostKind::Stub,
        &sample_definition(),
        &AgentError::registration("duplicate"),
    );
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise_tool_hooks(&TracingObservabilityHooks);
    exercise_host_hooks(&TracingObservabilityHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise_tool_hooks(&MetricsObservabilityHooks);
    exercise_host_hooks(&MetricsObservabilityHooks);
}

struct PanicHooks;

impl ToolRuntimeHooks for PanicHooks {
    fn on_execution_start(&self, _tool_call: &ToolCall, _context: &ToolExecutionContext) {
        panic!("start panic");
    }

    fn on_execution_success(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        _elapsed: Duration,
    ) {
        panic!("success panic");
    }

    fn on_execution_failure(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
        panic!("failure panic");
    }
}

impl AgentHostHooks for PanicHooks {
    fn on_tool_registered(&self, _host: HostKind, _definition: &ToolDefinition) {
        panic!("registered panic");
    }

    fn on_registration_failure(
        &self,
        _host: HostKind,
        _definition: &ToolDefinition,
        _error: &AgentError,
    ) {
        panic!("rejected panic");
    }
}

#[test]
fn safe_wrappers_swallow_hook_panics() {
    exercise_tool_hooks(&SafeToolHooks::new(PanicHooks));
    exercise_host_hooks(&SafeHostHooks::new(PanicHooks));
}

#[test]
fn fanout_of_tracing_and_metrics_smoke_test_all_callbacks() {
    let hooks = FanoutHooks::new(TracingObservabilityHooks, MetricsObservabilityHooks);
    exercise_tool_hooks(&hooks);
    exercise_host_hooks(&hooks);
}

#[derive(Default, Clone)]
struct RecordingHostHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl AgentHostHooks for RecordingHostHooks {
    fn on_tool_registered(&self, _host: HostKind, _definition: &ToolDefinition) {
        self.events.lock().expect("events lock").push("registered");
    }

    fn on_registration_failure(
        &self,
        _host: HostKind,
        _definition: &ToolDefinition,
        _error: &AgentError,
    ) {
        self.events.lock().expect("events lock").push("rejected");
    }
}

#[derive(Default, Clone)]
struct RecordingToolHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ToolRuntimeHooks for RecordingToolHooks {
    fn on_execution_start(&self, _tool_call: &ToolCall, _context: &ToolExecutionContext) {
        self.events.lock().expect("events lock").push("start");
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

#[test]
fn fanout_forwards_every_callback_to_both_hook_sets() {
    let first = RecordingToolHooks::default();
    let second = RecordingToolHooks::default();
    exercise_tool_hooks(&FanoutHooks::new(first.clone(), second.clone()));

    assert_eq!(*first.events.lock().expect("events lock"), vec!["start", "failure"]);
    assert_eq!(*second.events.lock().expect("events lock"), vec!["start", "failure"]);

    let first = RecordingHostHooks::default();
    let second = RecordingHostHooks::default();
    exercise_host_hooks(&FanoutHooks::new(first.clone(), second.clone()));

    assert_eq!(*first.events.lock().expect("events lock"), vec!["registered", "rejected"]);
    assert_eq!(*second.events.lock().expect("events lock"), vec!["registered", "rejected"]);
}

#[test]
fn safe_fanout_keeps_forwarding_after_a_panicking_hook() {
    let recording = RecordingHostHooks::default();
    let hooks = FanoutHooks::new(
        SafeHostHooks::new(PanicHooks),
        SafeHostHooks::new(recording.clone()),
    );

    exercise_host_hooks(&hooks);
    assert_eq!(*recording.events.lock().expect("events lock"), vec!["registered", "rejected"]);
}

#[test]
fn safe_host_wrapper_forwards_to_inner_hooks_during_install() {
    let recording = RecordingHostHooks::default();
    let mut host =
        StubAgentHost::new().with_hooks(Arc::new(SafeHostHooks::new(recording.clone())));

    root_agent().install(&mut host).expect("install should succeed");

    assert_eq!(host.describe().tools.len(), 1);
    assert_eq!(*recording.events.lock().expect("events lock"), vec!["registered"]);
}
