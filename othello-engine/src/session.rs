//! 协议会话
//!
//! 握手、读取配置，然后循环处理状态行和棋盘，直到收到 `FINAL`

use std::io::{BufRead, Write};

use othello_ai::{Algorithm, MoveSelector};
use protocol::{
    format_reply, BoardLiteral, EngineConfig, LineReader, LineWriter, Result, Status, ENGINE_NAME,
};
use tracing::{debug, info, warn};

/// 会话结束时的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// 回复的走法数（含无走法回复）
    pub moves: u32,
    /// 终局比分 (黑, 白)
    pub final_score: (u32, u32),
}

/// 协议会话
pub struct Session<R, W> {
    reader: LineReader<R>,
    writer: LineWriter<W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// 创建新会话
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: LineReader::new(reader),
            writer: LineWriter::new(writer),
        }
    }

    /// 运行完整会话
    pub fn run(&mut self) -> Result<SessionSummary> {
        let config = self.handshake()?;
        let mut selector = MoveSelector::from_engine_config(&config);
        let mut moves = 0;

        loop {
            let line = self.reader.read_line()?;
            match Status::parse(&line)? {
                Status::Final { dark, light } => {
                    info!("Game over: dark {} - light {}", dark, light);
                    return Ok(SessionSummary {
                        moves,
                        final_score: (dark, light),
                    });
                }
                Status::Score { dark, light } => {
                    debug!("Current score: dark {} - light {}", dark, light);
                    let board = BoardLiteral::parse(&self.reader.read_line()?)?;
                    let mv = selector.select(&board, config.color);
                    if mv.is_none() {
                        warn!("No move available for {}", config.color);
                    }
                    self.writer.write_line(&format_reply(mv))?;
                    moves += 1;
                }
            }
        }
    }

    /// 输出标识行并读取配置
    fn handshake(&mut self) -> Result<EngineConfig> {
        self.writer.write_line(ENGINE_NAME)?;
        let config = EngineConfig::parse(&self.reader.read_line()?)?;
        Self::log_config(&config);
        Ok(config)
    }

    fn log_config(config: &EngineConfig) {
        info!("Running {} as {}", config.algorithm, config.color);
        info!("State caching is {}", if config.use_cache { "ON" } else { "OFF" });
        info!("Node ordering is {}", if config.use_ordering { "ON" } else { "OFF" });
        match config.depth_limit {
            Some(depth) => info!("Depth limit is {}", depth),
            None => info!("Depth limit is OFF"),
        }
        info!("Cutoff evaluation is {:?}", config.eval_strategy);
        if config.algorithm == Algorithm::Minimax && config.use_ordering {
            warn!("Node ordering has no effect on minimax");
        }
    }

    /// 取回写入端
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}
