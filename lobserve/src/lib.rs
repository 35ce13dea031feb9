//! Observability hooks for tool execution and agent host registration.
//!
//! ```rust
//! use lobserve::{
//!     FanoutHooks, MetricsObservabilityHooks, SafeToolHooks, TracingObservabilityHooks,
//! };
//!
//! let _tool_hooks = SafeToolHooks::new(FanoutHooks::new(
//!     TracingObservabilityHooks,
//!     MetricsObservabilityHooks,
//! ));
//! ```

mod fanout_hooks;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout_hooks::FanoutHooks;
pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeHostHooks, SafeToolHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        FanoutHooks, MetricsObservabilityHooks, SafeHostHooks, SafeToolHooks,
        TracingObservabilityHooks,
    };
}

#[cfg(test)]
mod tests;
