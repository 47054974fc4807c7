//! 中间件模块

pub mod context;
pub mod latency;

pub use context::request_context;
pub use latency::simulated_latency;
