//! 置换表
//!
//! 缓存已搜索过的局面，避免重复计算。
//! 键为 (棋盘, 视角颜色, 是否极大节点)，不包含剩余深度和 alpha/beta 窗口。

use std::collections::HashMap;

use protocol::{Board, Color};

use crate::search::Evaluation;

/// 置换表键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: Board,
    pub color: Color,
    pub maximizing: bool,
}

impl CacheKey {
    pub fn new(board: &Board, color: Color, maximizing: bool) -> Self {
        Self {
            board: board.clone(),
            color,
            maximizing,
        }
    }
}

/// 置换表
///
/// 由走法选择器持有，每次根搜索前后清空
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, Evaluation>,
    /// 命中次数
    hits: u64,
    /// 查询次数
    probes: u64,
}

impl TranspositionCache {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询条目
    pub fn probe(&mut self, key: &CacheKey) -> Option<Evaluation> {
        self.probes += 1;
        let entry = self.entries.get(key).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// 存储条目（同键覆盖）
    pub fn store(&mut self, key: CacheKey, evaluation: Evaluation) {
        self.entries.insert(key, evaluation);
    }

    /// 清空表和统计
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.probes = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            probes: self.probes,
        }
    }
}

/// 置换表统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub probes: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::Move;

    #[test]
    fn test_cache_store_and_probe() {
        let mut cache = TranspositionCache::new();
        let key = CacheKey::new(&Board::initial(), Color::First, true);
        let evaluation = Evaluation::new(Some(Move::new(3, 2)), 3);

        cache.store(key.clone(), evaluation);

        assert_eq!(cache.probe(&key), Some(evaluation));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_miss() {
        let mut cache = TranspositionCache::new();
        let key = CacheKey::new(&Board::initial(), Color::First, true);
        assert_eq!(cache.probe(&key), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_key_distinguishes_color_and_node_kind() {
        let mut cache = TranspositionCache::new();
        let board = Board::initial();
        cache.store(CacheKey::new(&board, Color::First, true), Evaluation::new(None, 1));

        assert!(cache.probe(&CacheKey::new(&board, Color::First, false)).is_none());
        assert!(cache.probe(&CacheKey::new(&board, Color::Second, true)).is_none());
        assert!(cache.probe(&CacheKey::new(&board, Color::First, true)).is_some());
    }

    #[test]
    fn test_equal_boards_share_entry() {
        let mut cache = TranspositionCache::new();
        let a = Board::initial();
        let b = Board::try_from(a.rows()).unwrap();
        cache.store(CacheKey::new(&a, Color::Second, false), Evaluation::new(None, -2));

        assert_eq!(
            cache.probe(&CacheKey::new(&b, Color::Second, false)),
            Some(Evaluation::new(None, -2))
        );
    }

    #[test]
    fn test_stats_and_clear() {
        let mut cache = TranspositionCache::new();
        let key = CacheKey::new(&Board::initial(), Color::First, true);

        cache.probe(&key);
        cache.store(key.clone(), Evaluation::new(None, 0));
        cache.probe(&key);

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
