// Context ranking: which groups are characteristic of a specific document
// collection compared to a generic one.
//
// For every group we take its weighted frequency in both collections. Groups
// rarer than `alpha` in either collection are treated as noise and dropped.
// The rest are ranked by specific / generic frequency, highest first: a ratio
// above 1.0 means the group shows up more in the specific documents.

use std::cmp::Ordering;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::document::Document;
use super::weighted::group_weighted_frequency;
use crate::grouping::assemble::SemanticGroup;

/// Default minimum weighted frequency for a group to be kept.
pub const DEFAULT_ALPHA: f64 = 0.005;

/// A group that survived filtering, with the numbers behind its rank.
#[derive(Debug, Clone, Serialize)]
pub struct RankedGroup {
    pub group: SemanticGroup,
    pub specific_frequency: f64,
    pub generic_frequency: f64,
    /// specific_frequency / generic_frequency
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextFilter {
    /// Minimum weighted frequency in both collections
    pub alpha: f64,
}

impl Default for ContextFilter {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ContextFilter {
    /// Drop noise groups and rank the rest by frequency ratio, descending.
    ///
    /// Fails if either collection is empty.
    pub fn rank(
        &self,
        groups: &[SemanticGroup],
        specific: &[Document],
        generic: &[Document],
    ) -> Result<Vec<RankedGroup>> {
        if specific.is_empty() || generic.is_empty() {
            anyhow::bail!(
                "Context ranking needs non-empty specific and generic collections (got {} and {} documents)",
                specific.len(),
                generic.len()
            );
        }

        let mut ranked = Vec::new();
        let mut dropped = 0usize;

        for group in groups {
            let specific_frequency = group_weighted_frequency(group, specific)?;
            let generic_frequency = group_weighted_frequency(group, generic)?;

            // alpha may be 0.0; a zero generic frequency has no finite ratio.
            if specific_frequency < self.alpha
                || generic_frequency < self.alpha
                || generic_frequency == 0.0
            {
                dropped += 1;
                continue;
            }

            ranked.push(RankedGroup {
                group: group.clone(),
                specific_frequency,
                generic_frequency,
                ratio: specific_frequency / generic_frequency,
            });
        }

        ranked.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));

        debug!(
            kept = ranked.len(),
            dropped,
            alpha = self.alpha,
            "Ranked groups by context ratio"
        );

        Ok(ranked)
    }
}
