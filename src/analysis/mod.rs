//! Analysis module - filtering, aggregation and growth metrics

mod aggregator;

pub use aggregator::{AggregatedRow, GrowthAggregator};
