//! Alpha-Beta 搜索
//!
//! 与 Minimax 相同的节点结构，增加 alpha/beta 截断和可选的走法排序

use protocol::{Board, Color, MoveGenerator};

use crate::evaluate::Evaluator;
use crate::search::{is_better, DepthLimit, Evaluation, SearchContext, SearchOutcome};

/// Alpha-Beta 节点搜索
///
/// 子节点返回 `NoUsableValue` 时跳过；所有子节点都不可用时本节点也返回 `NoUsableValue`。
///
/// 截断检查在处理完子节点之后进行，所以第一个子节点总会被完整搜索；
/// 深度限制节点和终局节点总有分值，因此当前的搜索树里每个节点都返回 `Scored`，
/// `NoUsableValue` 只作为防护分支保留。
#[allow(clippy::too_many_arguments)]
pub(crate) fn alpha_beta(
    ctx: &mut SearchContext<'_>,
    maximizing: bool,
    board: &Board,
    color: Color,
    mut alpha: i32,
    mut beta: i32,
    depth: DepthLimit,
    ordering: bool,
) -> SearchOutcome {
    ctx.nodes += 1;

    let key = ctx.cache_key(board, color, maximizing);
    if let Some(hit) = ctx.probe(&key) {
        return SearchOutcome::Scored(hit);
    }

    let mover = if maximizing { color } else { color.opponent() };

    // 到达深度限制
    if depth == Some(0) {
        let result = Evaluation::new(None, ctx.horizon_value(board, color, mover));
        ctx.store(key, result);
        return SearchOutcome::Scored(result);
    }

    // 无子可下，终局
    let moves = MoveGenerator::legal_moves(board, mover);
    if moves.is_empty() {
        let result = Evaluation::new(None, Evaluator::utility(board, color));
        ctx.store(key, result);
        return SearchOutcome::Scored(result);
    }

    let mut children: Vec<_> = moves
        .into_iter()
        .map(|mv| (mv, MoveGenerator::apply(board, mover, mv)))
        .collect();

    // 走法排序：按一层静态评估，极大节点降序，极小节点升序（稳定排序）
    if ordering {
        let mut scored: Vec<_> = children
            .into_iter()
            .map(|(mv, next)| {
                let value = ctx.leaf_value(&next, color);
                (mv, next, value)
            })
            .collect();
        if maximizing {
            scored.sort_by(|a, b| b.2.cmp(&a.2));
        } else {
            scored.sort_by(|a, b| a.2.cmp(&b.2));
        }
        children = scored.into_iter().map(|(mv, next, _)| (mv, next)).collect();
    }

    let child_depth = depth.map(|d| d - 1);
    let mut best: Option<Evaluation> = None;

    for (mv, next) in children {
        let outcome = alpha_beta(
            ctx,
            !maximizing,
            &next,
            color,
            alpha,
            beta,
            child_depth,
            ordering,
        );

        if let SearchOutcome::Scored(child) = outcome {
            let value = child.value;
            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if best.map_or(true, |b| is_better(maximizing, value, b.value)) {
                best = Some(Evaluation::new(Some(mv), value));
            }
        }

        if alpha >= beta {
            ctx.cutoffs += 1;
            break;
        }
    }

    match best {
        Some(result) => {
            ctx.store(key, result);
            SearchOutcome::Scored(result)
        }
        None => SearchOutcome::NoUsableValue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::minimax;
    use crate::transposition::TranspositionCache;
    use protocol::{EvalStrategy, Move};

    fn run(board: &Board, color: Color, depth: DepthLimit, ordering: bool) -> (SearchOutcome, u64) {
        let mut cache = TranspositionCache::new();
        let mut ctx = SearchContext::new(&mut cache, false, EvalStrategy::Material);
        let outcome = alpha_beta(&mut ctx, true, board, color, i32::MIN, i32::MAX, depth, ordering);
        (outcome, ctx.nodes)
    }

    #[test]
    fn test_depth_one_opening() {
        let (outcome, _) = run(&Board::initial(), Color::First, Some(1), false);
        assert_eq!(outcome, SearchOutcome::Scored(Evaluation::new(Some(Move::new(3, 2)), 3)));
    }

    #[test]
    fn test_prunes_compared_to_minimax() {
        let board = Board::initial();

        let mut cache = TranspositionCache::new();
        let mut ctx = SearchContext::new(&mut cache, false, EvalStrategy::Material);
        let expected = minimax(&mut ctx, true, &board, Color::First, Some(4));
        let minimax_nodes = ctx.nodes;

        let (outcome, nodes) = run(&board, Color::First, Some(4), false);
        assert_eq!(outcome.value(), Some(expected.value));
        assert!(nodes < minimax_nodes, "alpha-beta {} vs minimax {}", nodes, minimax_nodes);
    }

    #[test]
    fn test_ordering_keeps_value() {
        let board = Board::initial();
        let (plain, _) = run(&board, Color::Second, Some(3), false);
        let (ordered, _) = run(&board, Color::Second, Some(3), true);
        assert_eq!(plain.value(), ordered.value());
    }

    #[test]
    fn test_every_window_yields_a_value() {
        // 任意窗口下第一个子节点都会被搜索，根节点总有分值
        let windows = [
            (i32::MIN, i32::MAX),
            (0, 0),
            (i32::MAX, i32::MIN),
            (i32::MIN, i32::MIN),
            (i32::MAX, i32::MAX),
        ];
        for board in [Board::initial(), Board::initial_with_size(4)] {
            for color in [Color::First, Color::Second] {
                for (alpha, beta) in windows {
                    for maximizing in [true, false] {
                        let mut cache = TranspositionCache::new();
                        let mut ctx =
                            SearchContext::new(&mut cache, true, EvalStrategy::Positional);
                        let outcome = alpha_beta(
                            &mut ctx,
                            maximizing,
                            &board,
                            color,
                            alpha,
                            beta,
                            Some(3),
                            true,
                        );
                        assert!(
                            outcome.best_move().is_some(),
                            "window ({}, {}) gave {:?}",
                            alpha,
                            beta,
                            outcome
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_narrow_window_cuts_at_root() {
        // 根窗口已闭合：第一个子节点之后立即截断
        let board = Board::initial();
        let mut cache = TranspositionCache::new();
        let mut ctx = SearchContext::new(&mut cache, false, EvalStrategy::Material);
        let outcome = alpha_beta(&mut ctx, true, &board, Color::First, 0, 0, Some(1), false);

        assert_eq!(outcome, SearchOutcome::Scored(Evaluation::new(Some(Move::new(3, 2)), 3)));
        assert_eq!(ctx.cutoffs, 1);
        // 根节点 + 一个子节点
        assert_eq!(ctx.nodes, 2);
    }
}
