//! 棋子颜色、格子与走法定义

use serde::{Deserialize, Serialize};

use crate::error::OthelloError;

/// 执子颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 黑方（先手，协议值 1）
    First,
    /// 白方（后手，协议值 2）
    Second,
}

impl Color {
    /// 获取对方颜色
    pub fn opponent(&self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// 协议中的数值
    pub fn to_wire(&self) -> u8 {
        match self {
            Color::First => 1,
            Color::Second => 2,
        }
    }

    /// 从协议数值解析
    pub fn from_wire(value: i64) -> Result<Color, OthelloError> {
        match value {
            1 => Ok(Color::First),
            2 => Ok(Color::Second),
            _ => Err(OthelloError::InvalidColor { value }),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::First => write!(f, "dark"),
            Color::Second => write!(f, "light"),
        }
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Color),
}

impl Cell {
    /// 协议中的数值：0 空，1 黑，2 白
    pub fn to_wire(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(color) => color.to_wire(),
        }
    }

    /// 从协议数值解析
    pub fn from_wire(value: i64) -> Result<Cell, OthelloError> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Stone(Color::First)),
            2 => Ok(Cell::Stone(Color::Second)),
            _ => Err(OthelloError::InvalidCell { value }),
        }
    }

    /// 是否为指定颜色的棋子
    pub fn is(&self, color: Color) -> bool {
        *self == Cell::Stone(color)
    }
}

/// 落子位置 (列, 行)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// 列
    pub col: u8,
    /// 行
    pub row: u8,
}

impl Move {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.col, self.row)
    }
}
