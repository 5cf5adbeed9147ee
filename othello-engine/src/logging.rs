//! 日志过滤配置

use tracing_subscriber::EnvFilter;

/// 未设置 RUST_LOG 时使用的过滤规则
pub const DEFAULT_LOG_FILTER: &str = "othello_engine=info,othello_ai=warn";

/// 根据 RUST_LOG 的值构造过滤器
///
/// 设置了 RUST_LOG 时完全按其规则过滤；未设置、为空或无法解析时使用默认规则
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
