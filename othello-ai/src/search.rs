//! 走法选择
//!
//! 根据配置调用 Minimax 或 Alpha-Beta，并负责置换表的生命周期

use protocol::{Board, Color, EngineConfig, Move, MoveGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alphabeta::alpha_beta;
use crate::evaluate::Evaluator;
use crate::minimax::minimax;
use crate::transposition::{CacheKey, CacheStats, TranspositionCache};

// 重导出算法和评估策略以便外部使用
pub use protocol::{Algorithm, EvalStrategy};

/// 剩余搜索深度，None 表示不限
pub type DepthLimit = Option<u32>;

/// 节点搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// 最佳走法，截断节点和终局节点为 None
    pub best: Option<Move>,
    pub value: i32,
}

impl Evaluation {
    pub fn new(best: Option<Move>, value: i32) -> Self {
        Self { best, value }
    }
}

/// 引擎返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Scored(Evaluation),
    /// 所有子节点都被截断，没有得到可用的分值
    NoUsableValue,
}

impl SearchOutcome {
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchOutcome::Scored(evaluation) => evaluation.best,
            SearchOutcome::NoUsableValue => None,
        }
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            SearchOutcome::Scored(evaluation) => Some(evaluation.value),
            SearchOutcome::NoUsableValue => None,
        }
    }
}

/// 极大节点取更大值，极小节点取更小值；相等不算更好
pub(crate) fn is_better(maximizing: bool, value: i32, current: i32) -> bool {
    if maximizing {
        value > current
    } else {
        value < current
    }
}

/// 搜索配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub depth_limit: DepthLimit,
    pub use_cache: bool,
    /// 仅对 Alpha-Beta 有效
    pub use_ordering: bool,
    pub eval_strategy: EvalStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth_limit: Some(4),
            use_cache: true,
            use_ordering: true,
            eval_strategy: EvalStrategy::Material,
        }
    }
}

impl From<&EngineConfig> for SearchConfig {
    fn from(config: &EngineConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            depth_limit: config.depth_limit,
            use_cache: config.use_cache,
            use_ordering: config.use_ordering,
            eval_strategy: config.eval_strategy,
        }
    }
}

/// 单次搜索统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 访问的节点数（含置换表命中）
    pub nodes: u64,
    /// Alpha-Beta 截断次数
    pub cutoffs: u64,
    /// 清空前的置换表统计
    pub cache: CacheStats,
}

/// 递归搜索共享的上下文
pub(crate) struct SearchContext<'a> {
    cache: &'a mut TranspositionCache,
    use_cache: bool,
    strategy: EvalStrategy,
    pub(crate) nodes: u64,
    pub(crate) cutoffs: u64,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        cache: &'a mut TranspositionCache,
        use_cache: bool,
        strategy: EvalStrategy,
    ) -> Self {
        Self {
            cache,
            use_cache,
            strategy,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// 未启用缓存时不构造键，避免复制棋盘
    pub(crate) fn cache_key(
        &self,
        board: &Board,
        color: Color,
        maximizing: bool,
    ) -> Option<CacheKey> {
        self.use_cache.then(|| CacheKey::new(board, color, maximizing))
    }

    pub(crate) fn probe(&mut self, key: &Option<CacheKey>) -> Option<Evaluation> {
        key.as_ref().and_then(|key| self.cache.probe(key))
    }

    pub(crate) fn store(&mut self, key: Option<CacheKey>, evaluation: Evaluation) {
        if let Some(key) = key {
            self.cache.store(key, evaluation);
        }
    }

    /// 静态评估值（截断节点和走法排序使用）
    pub(crate) fn leaf_value(&self, board: &Board, color: Color) -> i32 {
        Evaluator::evaluate(board, color, self.strategy)
    }

    /// 深度限制处的节点值
    ///
    /// `mover` 无子可下时该节点是终局，始终使用子数差
    pub(crate) fn horizon_value(&self, board: &Board, color: Color, mover: Color) -> i32 {
        if self.strategy != EvalStrategy::Material
            && MoveGenerator::legal_moves(board, mover).is_empty()
        {
            return Evaluator::utility(board, color);
        }
        self.leaf_value(board, color)
    }
}

/// 走法选择器
pub struct MoveSelector {
    config: SearchConfig,
    cache: TranspositionCache,
    last_stats: SearchStats,
}

impl MoveSelector {
    /// 创建新的走法选择器
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: TranspositionCache::new(),
            last_stats: SearchStats::default(),
        }
    }

    /// 从协议配置创建
    pub fn from_engine_config(config: &EngineConfig) -> Self {
        Self::new(SearchConfig::from(config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 从根节点（`color` 的极大节点）搜索，返回根结果
    pub fn search(&mut self, board: &Board, color: Color) -> SearchOutcome {
        let config = self.config;
        self.cache.clear();

        let mut ctx = SearchContext::new(&mut self.cache, config.use_cache, config.eval_strategy);
        let outcome = match config.algorithm {
            Algorithm::Minimax => {
                SearchOutcome::Scored(minimax(&mut ctx, true, board, color, config.depth_limit))
            }
            Algorithm::AlphaBeta => alpha_beta(
                &mut ctx,
                true,
                board,
                color,
                i32::MIN,
                i32::MAX,
                config.depth_limit,
                config.use_ordering,
            ),
        };
        let (nodes, cutoffs) = (ctx.nodes, ctx.cutoffs);

        self.last_stats = SearchStats {
            nodes,
            cutoffs,
            cache: self.cache.stats(),
        };
        debug!(
            "{} search for {}: nodes={}, cutoffs={}, cache entries={}, hit rate={:.2}, result={:?}",
            config.algorithm,
            color,
            nodes,
            cutoffs,
            self.last_stats.cache.entries,
            self.last_stats.cache.hit_rate(),
            outcome
        );

        self.cache.clear();
        outcome
    }

    /// 选择走法，没有可用走法时返回 None
    pub fn select(&mut self, board: &Board, color: Color) -> Option<Move> {
        match self.search(board, color) {
            SearchOutcome::Scored(evaluation) => evaluation.best,
            SearchOutcome::NoUsableValue => {
                warn!("Search produced no usable value, reporting no move");
                None
            }
        }
    }

    /// 上一次搜索的统计
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}
