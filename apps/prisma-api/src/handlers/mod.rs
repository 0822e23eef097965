//! Handlers 模块

pub mod codes;
pub mod health;
pub mod metrics;
pub mod translate;

pub use codes::*;
pub use health::*;
pub use metrics::*;
pub use translate::*;
