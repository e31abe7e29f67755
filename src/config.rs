use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::output::prompt::RenderOptions;
use crate::topics::AgglomerativeClusterer;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every value
/// has a default, and command-line flags override whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of labeled clusters (FEEDGIST_MAX_CLUSTERS)
    pub max_clusters: usize,
    /// Clusters smaller than this go to "Other" (FEEDGIST_MIN_CLUSTER_SIZE)
    pub min_cluster_size: usize,
    /// Merging stops below this cosine similarity (FEEDGIST_SIMILARITY_THRESHOLD)
    pub similarity_threshold: f64,
    /// Documents rendered per cluster (FEEDGIST_MAX_ITEMS)
    pub max_items_per_cluster: usize,
    /// Characters of excerpt/body rendered per document (FEEDGIST_BODY_CHARS)
    pub max_body_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        let clusterer = AgglomerativeClusterer::default();
        let render = RenderOptions::default();
        Self {
            max_clusters: clusterer.max_clusters,
            min_cluster_size: clusterer.min_cluster_size,
            similarity_threshold: clusterer.similarity_threshold,
            max_items_per_cluster: render.max_items_per_cluster,
            max_body_chars: render.max_body_chars,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_clusters: env_or("FEEDGIST_MAX_CLUSTERS", defaults.max_clusters)?,
            min_cluster_size: env_or("FEEDGIST_MIN_CLUSTER_SIZE", defaults.min_cluster_size)?,
            similarity_threshold: env_or(
                "FEEDGIST_SIMILARITY_THRESHOLD",
                defaults.similarity_threshold,
            )?,
            max_items_per_cluster: env_or("FEEDGIST_MAX_ITEMS", defaults.max_items_per_cluster)?,
            max_body_chars: env_or("FEEDGIST_BODY_CHARS", defaults.max_body_chars)?,
        })
    }

    /// Reject settings the engine would silently clamp or misbehave on.
    /// Call this after applying command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0.0 and 1.0, got {}",
                self.similarity_threshold
            );
        }
        if self.max_clusters == 0 {
            anyhow::bail!("max_clusters must be at least 1");
        }
        if self.min_cluster_size == 0 {
            anyhow::bail!("min_cluster_size must be at least 1");
        }
        if self.max_items_per_cluster == 0 {
            anyhow::bail!("max_items_per_cluster must be at least 1");
        }
        if self.max_body_chars == 0 {
            anyhow::bail!("max_body_chars must be at least 1");
        }
        Ok(())
    }

    pub fn clusterer(&self) -> AgglomerativeClusterer {
        AgglomerativeClusterer {
            max_clusters: self.max_clusters,
            min_cluster_size: self.min_cluster_size,
            similarity_threshold: self.similarity_threshold,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_items_per_cluster: self.max_items_per_cluster,
            max_body_chars: self.max_body_chars,
        }
    }
}

/// Parse an env var, or return `default` when it is unset or blank.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_clusters, 8);
        assert_eq!(config.min_cluster_size, 2);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = Config {
            similarity_threshold: 1.5,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("between 0.0 and 1.0"));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = Config {
            similarity_threshold: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_counts_rejected() {
        for config in [
            Config {
                max_clusters: 0,
                ..Config::default()
            },
            Config {
                min_cluster_size: 0,
                ..Config::default()
            },
            Config {
                max_items_per_cluster: 0,
                ..Config::default()
            },
        ] {
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_env_or_parses_and_rejects() {
        // Unique key names so parallel tests don't race on the same variable
        env::set_var("FEEDGIST_TEST_ENV_OR_OK", " 12 ");
        env::set_var("FEEDGIST_TEST_ENV_OR_BAD", "twelve");
        assert_eq!(env_or("FEEDGIST_TEST_ENV_OR_OK", 3usize).unwrap(), 12);
        assert_eq!(env_or("FEEDGIST_TEST_ENV_OR_UNSET", 3usize).unwrap(), 3);
        let err = env_or("FEEDGIST_TEST_ENV_OR_BAD", 3usize).unwrap_err();
        assert!(err.to_string().contains("FEEDGIST_TEST_ENV_OR_BAD"));
    }

    #[test]
    fn test_clusterer_and_render_options_follow_config() {
        let config = Config {
            max_clusters: 3,
            min_cluster_size: 4,
            similarity_threshold: 0.25,
            max_items_per_cluster: 2,
            max_body_chars: 80,
        };
        let clusterer = config.clusterer();
        assert_eq!(clusterer.max_clusters, 3);
        assert_eq!(clusterer.min_cluster_size, 4);
        assert_eq!(clusterer.similarity_threshold, 0.25);
        assert_eq!(config.render_options().max_body_chars, 80);
    }
}
