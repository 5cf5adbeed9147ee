//! 黑白棋引擎进程
//!
//! 包含:
//! - 控制协议会话（标准输入输出）
//! - 日志过滤配置

pub mod logging;
pub mod session;

pub use logging::{log_filter, DEFAULT_LOG_FILTER};
pub use session::{Session, SessionSummary};
