use std::env;

use anyhow::{Context, Result};

use crate::frequency::context::{ContextFilter, DEFAULT_ALPHA};
use crate::grouping::assemble::GroupingParams;
use crate::grouping::clique::SearchBudget;
use crate::grouping::matrix::DEFAULT_THRESHOLD;
use crate::grouping::pivot::PivotStrategy;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a
/// default, so an empty environment gives the stock 0.7 threshold, random
/// pivots, no search budget and a 0.005 noise cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum similarity for two senses to share an edge (SENSEGROUP_THRESHOLD)
    pub threshold: f64,
    /// Pivot rule (SENSEGROUP_PIVOT = first | random, SENSEGROUP_SEED)
    pub pivot: PivotStrategy,
    /// Clique-count cap (SENSEGROUP_MAX_CLIQUES)
    pub max_cliques: Option<usize>,
    /// Recursive-call cap (SENSEGROUP_MAX_CALLS)
    pub max_calls: Option<usize>,
    /// Noise cutoff for context ranking (SENSEGROUP_ALPHA)
    pub alpha: f64,
    /// Score the similarity matrix in parallel (SENSEGROUP_PARALLEL)
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            pivot: PivotStrategy::default(),
            max_cliques: None,
            max_calls: None,
            alpha: DEFAULT_ALPHA,
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the environment;
    /// tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let threshold = parse_var(&lookup, "SENSEGROUP_THRESHOLD")?.unwrap_or(DEFAULT_THRESHOLD);
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("SENSEGROUP_THRESHOLD must be within [0, 1], got {threshold}");
        }

        let alpha = parse_var(&lookup, "SENSEGROUP_ALPHA")?.unwrap_or(DEFAULT_ALPHA);
        if !(0.0..=1.0).contains(&alpha) {
            anyhow::bail!("SENSEGROUP_ALPHA must be within [0, 1], got {alpha}");
        }

        let seed: Option<u64> = parse_var(&lookup, "SENSEGROUP_SEED")?;
        let pivot = match lookup("SENSEGROUP_PIVOT").as_deref() {
            Some("first") => PivotStrategy::First,
            // "random" or unset both default to random
            Some("random") | None => PivotStrategy::Random { seed },
            Some(other) => anyhow::bail!(
                "SENSEGROUP_PIVOT must be \"first\" or \"random\", got \"{other}\""
            ),
        };

        Ok(Self {
            threshold,
            pivot,
            max_cliques: parse_var(&lookup, "SENSEGROUP_MAX_CLIQUES")?,
            max_calls: parse_var(&lookup, "SENSEGROUP_MAX_CALLS")?,
            alpha,
            parallel: parse_var(&lookup, "SENSEGROUP_PARALLEL")?.unwrap_or(false),
        })
    }

    pub fn grouping_params(&self) -> GroupingParams {
        GroupingParams {
            threshold: self.threshold,
            pivot: self.pivot,
            budget: SearchBudget {
                max_cliques: self.max_cliques,
                max_calls: self.max_calls,
            },
            parallel: self.parallel,
        }
    }

    pub fn context_filter(&self) -> ContextFilter {
        ContextFilter { alpha: self.alpha }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {key}: \"{raw}\"")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.alpha, 0.005);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SENSEGROUP_THRESHOLD", "0.85"),
            ("SENSEGROUP_PIVOT", "random"),
            ("SENSEGROUP_SEED", "11"),
            ("SENSEGROUP_MAX_CLIQUES", "500"),
            ("SENSEGROUP_PARALLEL", "true"),
        ])
        .unwrap();

        assert_eq!(config.threshold, 0.85);
        assert_eq!(config.pivot, PivotStrategy::Random { seed: Some(11) });
        assert_eq!(config.max_cliques, Some(500));
        assert!(config.parallel);

        let params = config.grouping_params();
        assert_eq!(params.budget.max_cliques, Some(500));
        assert_eq!(params.budget.max_calls, None);
    }

    #[test]
    fn test_first_pivot() {
        let config = load(&[("SENSEGROUP_PIVOT", "first")]).unwrap();
        assert_eq!(config.pivot, PivotStrategy::First);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("SENSEGROUP_THRESHOLD", "1.5")]).is_err());
        assert!(load(&[("SENSEGROUP_THRESHOLD", "high")]).is_err());
        assert!(load(&[("SENSEGROUP_PIVOT", "median")]).is_err());
        assert!(load(&[("SENSEGROUP_MAX_CALLS", "-3")]).is_err());
    }
}
