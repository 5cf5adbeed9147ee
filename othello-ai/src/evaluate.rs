//! 棋局评估函数

use protocol::{Board, Cell, Color, EvalStrategy, MoveGenerator};

/// 评估器
pub struct Evaluator;

/// 角附近的偏移，与 `Board::corners` 的顺序一一对应
mod offsets {
    /// X 位（角的对角相邻格）
    pub const X_SQUARES: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

    /// 邻角位（角的上下/左右相邻格）
    pub const ADJACENT: [[(i32, i32); 2]; 4] = [
        [(0, 1), (1, 0)],
        [(-1, 0), (0, 1)],
        [(1, 0), (0, -1)],
        [(-1, 0), (0, -1)],
    ];
}

impl Evaluator {
    /// 子数差（`color` 视角，正值对 `color` 有利）
    ///
    /// 终局节点始终使用此函数
    pub fn utility(board: &Board, color: Color) -> i32 {
        let (first, second) = MoveGenerator::score(board);
        let diff = first as i32 - second as i32;
        match color {
            Color::First => diff,
            Color::Second => -diff,
        }
    }

    /// 位置启发评估（`color` 视角）
    pub fn heuristic(board: &Board, color: Color) -> i32 {
        let area = board.area() as i32;
        let corner_weight = area * 10;
        let risky_weight = -corner_weight / 2;
        let win_bonus = area * 100;

        let mut score = 0;

        // 行动力：对方可选走法数
        let opponent_moves = MoveGenerator::legal_moves(board, color.opponent()).len() as i32;
        score += opponent_moves;

        // 胜局加成
        if opponent_moves == 0 && Self::utility(board, color) > 0 {
            score += win_bonus;
        }

        let corners = board.corners();

        // 角
        let corner_balance: i32 = corners
            .iter()
            .map(|&(col, row)| Self::ownership(board, col, row, color))
            .sum();
        score += corner_balance * corner_weight;

        // X 位和邻角位（仅在角为空时计算）
        let mut risky_balance = 0;
        for (i, &(col, row)) in corners.iter().enumerate() {
            if board.get_signed(col, row) != Some(Cell::Empty) {
                continue;
            }

            let (dx, dy) = offsets::X_SQUARES[i];
            risky_balance += Self::ownership(board, col + dx, row + dy, color);

            for (dx, dy) in offsets::ADJACENT[i] {
                risky_balance += Self::ownership(board, col + dx, row + dy, color);
            }
        }
        score += risky_balance * risky_weight;

        score
    }

    /// 按策略评估截断节点
    pub fn evaluate(board: &Board, color: Color, strategy: EvalStrategy) -> i32 {
        match strategy {
            EvalStrategy::Material => Self::utility(board, color),
            EvalStrategy::Positional => Self::heuristic(board, color),
        }
    }

    /// 己方 +1，对方 -1，空位或越界 0
    fn ownership(board: &Board, col: i32, row: i32, color: Color) -> i32 {
        match board.get_signed(col, row) {
            Some(Cell::Stone(c)) if c == color => 1,
            Some(Cell::Stone(_)) => -1,
            _ => 0,
        }
    }
}
