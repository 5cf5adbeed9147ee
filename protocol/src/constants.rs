//! 协议常量定义

/// 引擎标识（握手第一行）
pub const ENGINE_NAME: &str = "IAGO AI";

/// 标准棋盘边长
pub const STANDARD_SIZE: usize = 8;

/// 允许的最大棋盘边长
pub const MAX_BOARD_SIZE: usize = 26;

/// 深度无限制在配置行中的取值
pub const UNBOUNDED_DEPTH: i64 = -1;

/// 无走法时的输出
pub const NO_MOVE_REPLY: &str = "None None";
