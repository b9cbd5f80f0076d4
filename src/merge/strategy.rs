//! Merge strategies and the configurable merger.

use crate::core::error::MergeResult;
use crate::merge::frequency::FrequencyMap;
use log::debug;

/// Trait for merge strategies.
///
/// Every strategy must produce the same ordered output for the same inputs.
pub trait MergeStrategy: Send + Sync {
    /// Name of this strategy.
    fn name(&self) -> &str;

    /// Sum counts per word across `maps`, ordered by first appearance.
    fn combine(&self, maps: &[FrequencyMap]) -> FrequencyMap;
}

/// Incremental accumulation: each `(word, count)` pair is added one at a time.
pub struct Accumulate;

impl MergeStrategy for Accumulate {
    fn name(&self) -> &str {
        "accumulate"
    }

    fn combine(&self, maps: &[FrequencyMap]) -> FrequencyMap {
        let mut merged = FrequencyMap::new();
        for map in maps {
            for (word, count) in map.iter() {
                merged.add(word, count);
            }
        }
        merged
    }
}

/// Bulk counting: each whole map is folded into a running counter.
pub struct BulkCount;

impl MergeStrategy for BulkCount {
    fn name(&self) -> &str {
        "bulk_count"
    }

    fn combine(&self, maps: &[FrequencyMap]) -> FrequencyMap {
        maps.iter().fold(FrequencyMap::new(), |mut counter, map| {
            counter.update(map);
            counter
        })
    }
}

/// Selects one of the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Add each `(word, count)` pair in turn. See [`Accumulate`].
    #[default]
    Accumulate,
    /// Fold whole maps into a running counter. See [`BulkCount`].
    BulkCount,
}

impl StrategyKind {
    /// Create the strategy this kind names.
    pub fn strategy(&self) -> Box<dyn MergeStrategy> {
        match self {
            StrategyKind::Accumulate => Box::new(Accumulate),
            StrategyKind::BulkCount => Box::new(BulkCount),
        }
    }
}

/// Options for merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Which strategy sums the counts.
    pub strategy: StrategyKind,
    /// Whether to order the result by count, highest first.
    /// When false the result keeps first-appearance order.
    pub sort_by_frequency: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Accumulate,
            sort_by_frequency: true,
        }
    }
}

impl MergeOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable frequency ordering.
    pub fn with_sort_by_frequency(mut self, sort: bool) -> Self {
        self.sort_by_frequency = sort;
        self
    }
}

/// Merges frequency maps according to [`MergeOptions`].
pub struct Merger {
    strategy: Box<dyn MergeStrategy>,
    sort_by_frequency: bool,
}

impl Merger {
    /// Create a merger from options.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            strategy: options.strategy.strategy(),
            sort_by_frequency: options.sort_by_frequency,
        }
    }

    /// Create a merger around a custom strategy.
    pub fn with_strategy(strategy: Box<dyn MergeStrategy>) -> Self {
        Self {
            strategy,
            sort_by_frequency: true,
        }
    }

    /// Name of the strategy in use.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Merge `maps` into one.
    pub fn merge(&self, maps: &[FrequencyMap]) -> FrequencyMap {
        let mut merged = self.strategy.combine(maps);
        if self.sort_by_frequency {
            merged.sort_by_frequency();
        }
        debug!(
            "merged {} frequency map(s) into {} word(s) using {}",
            maps.len(),
            merged.len(),
            self.strategy.name()
        );
        merged
    }

    /// Parse JSON objects and merge them.
    pub fn merge_json(&self, maps: &[serde_json::Value]) -> MergeResult<FrequencyMap> {
        let parsed = maps
            .iter()
            .enumerate()
            .map(|(index, json)| FrequencyMap::from_json(index, json))
            .collect::<MergeResult<Vec<_>>>()?;
        Ok(self.merge(&parsed))
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

/// Merge `maps` with the default options, highest count first.
pub fn merge(maps: &[FrequencyMap]) -> FrequencyMap {
    Merger::default().merge(maps)
}

/// Merge by incremental accumulation, highest count first.
pub fn merge_with_accumulator(maps: &[FrequencyMap]) -> FrequencyMap {
    Merger::new(MergeOptions::new().with_strategy(StrategyKind::Accumulate)).merge(maps)
}

/// Merge by bulk counting, highest count first.
pub fn merge_with_counter(maps: &[FrequencyMap]) -> FrequencyMap {
    Merger::new(MergeOptions::new().with_strategy(StrategyKind::BulkCount)).merge(maps)
}

/// Parse JSON objects and merge them with the default options.
pub fn merge_json(maps: &[serde_json::Value]) -> MergeResult<FrequencyMap> {
    Merger::default().merge_json(maps)
}
