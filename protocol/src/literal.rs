//! 棋盘文本解析和生成
//!
//! 棋盘文本为行列表，每行是 0/1/2 整数列表：
//! `[[0, 0, 0, 0], [0, 2, 1, 0], [0, 1, 2, 0], [0, 0, 0, 0]]`
//!
//! 使用结构化 JSON 解析，解析结果经 `Board::try_from` 严格校验
//! （非空、正方形、取值合法），不会执行任何输入内容。

use crate::board::Board;
use crate::error::Result;

/// 棋盘文本处理
pub struct BoardLiteral;

impl BoardLiteral {
    /// 解析棋盘文本
    pub fn parse(text: &str) -> Result<Board> {
        let board: Board = serde_json::from_str(text.trim())?;
        Ok(board)
    }

    /// 将棋盘转换为文本
    pub fn to_string(board: &Board) -> String {
        let rows: Vec<String> = board
            .rows()
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        format!("[{}]", rows.join(", "))
    }
}
