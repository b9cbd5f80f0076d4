//! Word-frequency merging.
//!
//! Counts are summed per word across any number of maps and the result is
//! ordered by count, highest first.

pub mod frequency;
pub mod strategy;

pub use frequency::FrequencyMap;
pub use strategy::{
    merge, merge_json, merge_with_accumulator, merge_with_counter, Accumulate, BulkCount,
    MergeOptions, MergeStrategy, Merger, StrategyKind,
};
