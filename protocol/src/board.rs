//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BOARD_SIZE, STANDARD_SIZE};
use crate::error::OthelloError;
use crate::piece::{Cell, Color, Move};

/// 棋盘
///
/// 正方形网格，以 (列, 行) 寻址，原点 (0, 0) 在左上角。
/// 序列化形式为行列表（每行是 0/1/2 整数列表），反序列化时严格校验。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Board {
    /// 边长
    size: usize,
    /// 索引为 row * size + col
    cells: Vec<Cell>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// 创建标准 8x8 初始棋盘
    pub fn initial() -> Self {
        Self::initial_with_size(STANDARD_SIZE)
    }

    /// 创建指定边长的初始棋盘（中心四子，边长需为偶数）
    pub fn initial_with_size(size: usize) -> Self {
        let mut board = Self::empty(size);
        if size >= 2 {
            let mid = size / 2;
            board.set(mid - 1, mid - 1, Cell::Stone(Color::Second));
            board.set(mid, mid, Cell::Stone(Color::Second));
            board.set(mid, mid - 1, Cell::Stone(Color::First));
            board.set(mid - 1, mid, Cell::Stone(Color::First));
        }
        board
    }

    /// 棋盘边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 格子总数
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// 获取指定位置的格子，越界返回 None
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.size && row < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// 按有符号坐标获取格子（便于偏移计算）
    pub fn get_signed(&self, col: i32, row: i32) -> Option<Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }

    /// 获取走法位置的格子
    pub fn at(&self, mv: Move) -> Option<Cell> {
        self.get(mv.col as usize, mv.row as usize)
    }

    /// 设置指定位置的格子（越界忽略）
    pub(crate) fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.size && row < self.size {
            self.cells[row * self.size + col] = cell;
        }
    }

    /// 统计指定颜色的棋子数
    pub fn count(&self, color: Color) -> u32 {
        self.cells.iter().filter(|cell| cell.is(color)).count() as u32
    }

    /// 四个角的坐标：左上、右上、左下、右下
    pub fn corners(&self) -> [(i32, i32); 4] {
        let dim = self.size as i32 - 1;
        [(0, 0), (dim, 0), (0, dim), (dim, dim)]
    }

    /// 转换为行列表
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|cell| cell.to_wire() as i64).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Board {
    type Error = OthelloError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(OthelloError::EmptyBoard);
        }
        if size > MAX_BOARD_SIZE {
            return Err(OthelloError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(OthelloError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for &value in values {
                cells.push(Cell::from_wire(value)?);
            }
        }

        Ok(Self { size, cells })
    }
}

impl From<Board> for Vec<Vec<i64>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let c = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Stone(Color::First) => 'X',
                    Cell::Stone(Color::Second) => 'O',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
