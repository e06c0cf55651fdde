use std::collections::HashMap;

use tracing::debug;

use crate::{median_of, GroupKey, Layout, SampleGroups, Series};

/// Median throughput for every (category, series) pair of a [`Layout`].
///
/// Pairs without samples hold `0.0`, so lookups never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianTable {
    medians: HashMap<GroupKey, f64>,
}

impl MedianTable {
    pub fn get(&self, pattern: &str, implementation: &str) -> f64 {
        self.medians
            .get(&GroupKey::new(pattern, implementation))
            .copied()
            .unwrap_or(0.0)
    }

    /// Medians of one series in category order.
    pub fn series(&self, layout: &Layout, series: &Series) -> Vec<f64> {
        layout
            .categories
            .iter()
            .map(|category| self.get(category, &series.key))
            .collect()
    }

    /// (pattern, impl, median) for every pair of `layout`, category major.
    pub fn iter<'a>(
        &'a self,
        layout: &'a Layout,
    ) -> impl Iterator<Item = (&'a str, &'a str, f64)> {
        layout.keys().map(move |(pattern, implementation)| {
            (pattern, implementation, self.get(pattern, implementation))
        })
    }

    pub fn len(&self) -> usize {
        self.medians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medians.is_empty()
    }
}

/// Computes the median of every pair in `layout`, observed in the data or not.
pub fn reduce(groups: &SampleGroups, layout: &Layout) -> MedianTable {
    let medians = layout
        .keys()
        .map(|(pattern, implementation)| {
            let median = median_of(groups.get(pattern, implementation));
            (GroupKey::new(pattern, implementation), median)
        })
        .collect();

    let table = MedianTable { medians };
    for (pattern, implementation, median) in table.iter(layout) {
        debug!(pattern, implementation, median, "reduced group");
    }
    table
}
