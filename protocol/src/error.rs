//! 错误类型定义

use thiserror::Error;

/// 黑白棋规则/数据错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OthelloError {
    /// 无效的格子取值（只允许 0/1/2）
    #[error("Invalid cell value: {value}")]
    InvalidCell { value: i64 },

    /// 无效的颜色取值（只允许 1/2）
    #[error("Invalid color: {value}")]
    InvalidColor { value: i64 },

    /// 空棋盘
    #[error("Board has no rows")]
    EmptyBoard,

    /// 棋盘不是正方形
    #[error("Row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// 棋盘过大
    #[error("Board too large: {size}x{size} (max: {max})")]
    BoardTooLarge { size: usize, max: usize },
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 棋盘文本解析错误
    #[error("Malformed board literal: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置行无效
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// 状态行无效
    #[error("Invalid status line: {line:?}")]
    InvalidStatus { line: String },

    /// 输入流已关闭
    #[error("Connection closed")]
    ConnectionClosed,

    /// 黑白棋规则错误
    #[error("Othello error: {0}")]
    Othello(#[from] OthelloError),
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
