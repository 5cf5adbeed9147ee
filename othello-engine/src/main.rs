use anyhow::{Context, Result};
use othello_engine::{log_filter, Session};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // 初始化日志（标准输出是协议通道，日志写到标准错误）
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref()))
        .init();

    info!("黑白棋引擎启动中...");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    let summary = session.run().context("protocol session failed")?;

    info!(
        "会话结束：共回复 {} 步，终局比分 {}:{}",
        summary.moves, summary.final_score.0, summary.final_score.1
    );
    Ok(())
}
