//! 黑白棋共享协议库
//!
//! 包含:
//! - 颜色、格子、走法、棋盘等核心数据结构
//! - 走法生成和落子翻转
//! - 棋盘文本解析
//! - 控制协议消息 (EngineConfig, Status)
//! - 行传输 (LineReader, LineWriter)

mod board;
mod constants;
mod error;
mod literal;
mod message;
mod moves;
mod piece;
mod transport;

pub use board::Board;
pub use constants::*;
pub use error::{OthelloError, ProtocolError, Result};
pub use literal::BoardLiteral;
pub use message::{format_reply, Algorithm, EngineConfig, EvalStrategy, Status};
pub use moves::MoveGenerator;
pub use piece::{Cell, Color, Move};
pub use transport::{LineReader, LineWriter};
