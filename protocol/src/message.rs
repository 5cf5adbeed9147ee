//! 控制协议消息定义
//!
//! 协议为按行的文本：
//! 1. 引擎输出标识行
//! 2. 引擎读取配置行 `color,depth,algorithm,caching,ordering[,eval]`
//! 3. 循环读取状态行 `SCORE <黑> <白>` / `FINAL <黑> <白>`，
//!    `SCORE` 之后跟一行棋盘文本，引擎回复 `<列> <行>`

use serde::{Deserialize, Serialize};

use crate::constants::{NO_MOVE_REPLY, UNBOUNDED_DEPTH};
use crate::error::{ProtocolError, Result};
use crate::piece::{Color, Move};

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// 朴素深度受限 Minimax
    Minimax,
    /// Alpha-Beta 剪枝
    #[default]
    AlphaBeta,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "MINIMAX"),
            Algorithm::AlphaBeta => write!(f, "ALPHA-BETA"),
        }
    }
}

/// 截断节点的评估策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvalStrategy {
    /// 子数差
    #[default]
    Material,
    /// 位置启发（行动力、角、X 位、邻角位）
    Positional,
}

/// 引擎配置（来自配置行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// AI 执子颜色
    pub color: Color,
    /// 搜索深度，None 表示不限
    pub depth_limit: Option<u32>,
    pub algorithm: Algorithm,
    pub use_cache: bool,
    /// 仅对 Alpha-Beta 有效
    pub use_ordering: bool,
    pub eval_strategy: EvalStrategy,
}

impl EngineConfig {
    /// 解析配置行
    pub fn parse(line: &str) -> Result<Self> {
        let fields = line
            .trim()
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<i64>()
                    .map_err(|_| invalid_config(format!("not an integer: {:?}", field)))
            })
            .collect::<Result<Vec<i64>>>()?;

        if fields.len() != 5 && fields.len() != 6 {
            return Err(invalid_config(format!("expected 5 or 6 fields, got {}", fields.len())));
        }

        let color = Color::from_wire(fields[0])?;

        let depth_limit = match fields[1] {
            UNBOUNDED_DEPTH => None,
            depth if depth >= 0 => Some(u32::try_from(depth).map_err(|_| {
                invalid_config(format!("depth limit too large: {}", depth))
            })?),
            depth => return Err(invalid_config(format!("invalid depth limit: {}", depth))),
        };

        let algorithm = if fields[2] == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };

        let use_cache = parse_flag("caching", fields[3])?;
        let use_ordering = parse_flag("ordering", fields[4])?;

        let eval_strategy = match fields.get(5) {
            None | Some(0) => EvalStrategy::Material,
            Some(1) => EvalStrategy::Positional,
            Some(other) => return Err(invalid_config(format!("invalid eval strategy: {}", other))),
        };

        Ok(Self {
            color,
            depth_limit,
            algorithm,
            use_cache,
            use_ordering,
            eval_strategy,
        })
    }
}

impl std::fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let depth = match self.depth_limit {
            Some(depth) => depth.to_string(),
            None => "unbounded".to_string(),
        };
        write!(
            f,
            "color={} depth={} algorithm={} caching={} ordering={} eval={:?}",
            self.color, depth, self.algorithm, self.use_cache, self.use_ordering, self.eval_strategy
        )
    }
}

fn parse_flag(name: &str, value: i64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(invalid_config(format!("{} flag must be 0 or 1, got {}", name, value))),
    }
}

fn invalid_config(reason: String) -> ProtocolError {
    ProtocolError::InvalidConfig { reason }
}

/// 状态行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// 对局进行中，随后一行为棋盘
    Score { dark: u32, light: u32 },
    /// 对局结束
    Final { dark: u32, light: u32 },
}

impl Status {
    /// 解析状态行
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = || ProtocolError::InvalidStatus {
            line: line.to_string(),
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let dark = parts[1].parse().map_err(|_| invalid())?;
        let light = parts[2].parse().map_err(|_| invalid())?;

        match parts[0] {
            "SCORE" => Ok(Status::Score { dark, light }),
            "FINAL" => Ok(Status::Final { dark, light }),
            _ => Err(invalid()),
        }
    }
}

/// 格式化走法回复
pub fn format_reply(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => mv.to_string(),
        None => NO_MOVE_REPLY.to_string(),
    }
}
