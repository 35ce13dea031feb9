//! Capability layer for declaring, registering, and executing agent tools.

mod args;
mod error;
mod hooks;
mod model;
mod registry;
mod runtime;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolRuntime, FunctionTool, Tool, ToolCall, ToolDefinition, ToolError,
        ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture, ToolRegistry,
        ToolRuntime, ToolRuntimeHooks,
    };
}

pub use args::{parse_json_object, parse_json_value, required_string};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use model::{ToolCall, ToolDefinition};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use tool::{FunctionTool, Tool, ToolFuture};
pub use types::{ToolExecutionContext, ToolExecutionResult};
