//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 棋局评估函数（子数差、位置启发）
//! - Minimax 搜索
//! - Alpha-Beta 搜索与走法排序
//! - 置换表

mod alphabeta;
mod evaluate;
mod minimax;
mod search;
mod transposition;

pub use evaluate::Evaluator;
pub use search::{
    Algorithm, DepthLimit, EvalStrategy, Evaluation, MoveSelector, SearchConfig, SearchOutcome,
    SearchStats,
};
pub use transposition::{CacheKey, CacheStats, TranspositionCache};
