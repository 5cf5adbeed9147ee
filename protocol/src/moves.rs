//! 走法生成与落子

use crate::board::Board;
use crate::piece::{Cell, Color, Move};

/// 八个方向 (dcol, drow)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定颜色的所有合法走法（按行优先顺序）
    ///
    /// 返回空列表表示该方无子可下，必须弃权
    pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
        let size = board.size();
        let mut moves = Vec::new();

        for row in 0..size {
            for col in 0..size {
                let mv = Move::new(col as u8, row as u8);
                if Self::is_legal(board, color, mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// 检查走法是否合法：目标为空且至少能夹住一条线
    pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
        if board.at(mv) != Some(Cell::Empty) {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dc, dr)| Self::flips_in_direction(board, color, mv, dc, dr) > 0)
    }

    /// 落子并翻转被夹住的棋子，返回新棋盘（不修改输入）
    ///
    /// 不检查规则，调用方需保证走法来自 `legal_moves`
    pub fn apply(board: &Board, color: Color, mv: Move) -> Board {
        let mut next = board.clone();
        let (col, row) = (mv.col as i32, mv.row as i32);
        next.set(col as usize, row as usize, Cell::Stone(color));

        for (dc, dr) in DIRECTIONS {
            let count = Self::flips_in_direction(board, color, mv, dc, dr);
            for step in 1..=count as i32 {
                next.set(
                    (col + dc * step) as usize,
                    (row + dr * step) as usize,
                    Cell::Stone(color),
                );
            }
        }

        next
    }

    /// 双方棋子数 (黑, 白)
    pub fn score(board: &Board) -> (u32, u32) {
        (board.count(Color::First), board.count(Color::Second))
    }

    /// 计算某方向上会被翻转的棋子数
    fn flips_in_direction(board: &Board, color: Color, mv: Move, dc: i32, dr: i32) -> usize {
        let opponent = Cell::Stone(color.opponent());
        let mut col = mv.col as i32 + dc;
        let mut row = mv.row as i32 + dr;
        let mut count = 0;

        while board.get_signed(col, row) == Some(opponent) {
            count += 1;
            col += dc;
            row += dr;
        }

        // 必须以己方棋子收尾
        if count > 0 && board.get_signed(col, row) == Some(Cell::Stone(color)) {
            count
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves() {
        let board = Board::initial();
        let moves = MoveGenerator::legal_moves(&board, Color::First);
        assert_eq!(
            moves,
            vec![Move::new(3, 2), Move::new(2, 3), Move::new(5, 4), Move::new(4, 5)]
        );

        let moves = MoveGenerator::legal_moves(&board, Color::Second);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_apply_flips() {
        let board = Board::initial();
        let next = MoveGenerator::apply(&board, Color::First, Move::new(3, 2));

        assert_eq!(next.get(3, 2), Some(Cell::Stone(Color::First)));
        assert_eq!(next.get(3, 3), Some(Cell::Stone(Color::First)));
        assert_eq!(MoveGenerator::score(&next), (4, 1));

        // 原棋盘不变
        assert_eq!(MoveGenerator::score(&board), (2, 2));
    }

    #[test]
    fn test_apply_flips_multiple_lines() {
        // X O .
        // O O .
        // . . .
        // 黑方在 (2,2) 落子只能沿对角线翻转 (1,1)
        let board = Board::try_from(vec![
            vec![1, 2, 0],
            vec![2, 2, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert!(MoveGenerator::is_legal(&board, Color::First, Move::new(2, 2)));

        let next = MoveGenerator::apply(&board, Color::First, Move::new(2, 2));
        assert_eq!(next.get(1, 1), Some(Cell::Stone(Color::First)));
        assert_eq!(next.get(1, 0), Some(Cell::Stone(Color::Second)));
        assert_eq!(MoveGenerator::score(&next), (3, 2));
    }

    #[test]
    fn test_no_moves_when_blocked() {
        // 全部为黑，白方无子可下
        let board = Board::try_from(vec![vec![1, 1], vec![1, 0]]).unwrap();
        assert!(MoveGenerator::legal_moves(&board, Color::Second).is_empty());
        assert!(MoveGenerator::legal_moves(&board, Color::First).is_empty());
    }

    #[test]
    fn test_occupied_square_illegal() {
        let board = Board::initial();
        assert!(!MoveGenerator::is_legal(&board, Color::First, Move::new(3, 3)));
        assert!(!MoveGenerator::is_legal(&board, Color::First, Move::new(9, 9)));
    }

    #[test]
    fn test_unclosed_line_does_not_flip() {
        // O O . 行末没有己方棋子
        let board = Board::try_from(vec![
            vec![0, 2, 2],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert!(!MoveGenerator::is_legal(&board, Color::First, Move::new(0, 0)));
    }
}
