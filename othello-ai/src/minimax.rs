//! Minimax 搜索
//!
//! 不剪枝的深度受限搜索，极大/极小节点交替

use protocol::{Board, Color, MoveGenerator};

use crate::evaluate::Evaluator;
use crate::search::{is_better, DepthLimit, Evaluation, SearchContext};

/// Minimax 节点搜索
///
/// `color` 始终是根节点（AI）的颜色，极大节点由 `color` 走子，极小节点由对方走子
pub(crate) fn minimax(
    ctx: &mut SearchContext<'_>,
    maximizing: bool,
    board: &Board,
    color: Color,
    depth: DepthLimit,
) -> Evaluation {
    ctx.nodes += 1;

    let key = ctx.cache_key(board, color, maximizing);
    if let Some(hit) = ctx.probe(&key) {
        return hit;
    }

    let mover = if maximizing { color } else { color.opponent() };

    // 到达深度限制
    if depth == Some(0) {
        let result = Evaluation::new(None, ctx.horizon_value(board, color, mover));
        ctx.store(key, result);
        return result;
    }

    // 无子可下，终局
    let moves = MoveGenerator::legal_moves(board, mover);
    if moves.is_empty() {
        let result = Evaluation::new(None, Evaluator::utility(board, color));
        ctx.store(key, result);
        return result;
    }

    let child_depth = depth.map(|d| d - 1);
    let mut best: Option<Evaluation> = None;

    for mv in moves {
        let next = MoveGenerator::apply(board, mover, mv);
        let value = minimax(ctx, !maximizing, &next, color, child_depth).value;

        // 同分保留先出现的走法
        if best.map_or(true, |b| is_better(maximizing, value, b.value)) {
            best = Some(Evaluation::new(Some(mv), value));
        }
    }

    let result = best.unwrap_or_else(|| Evaluation::new(None, Evaluator::utility(board, color)));
    ctx.store(key, result);
    result
}
