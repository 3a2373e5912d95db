//! Configuration for rasterization and gap filling.

use crate::interpolation::MIN_KNOWN_NEIGHBORS;
use serde::{Deserialize, Serialize};

/// Configuration for the rasterize-and-fill pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    /// Whether same-sweep writes are visible to later cells of that sweep.
    pub sweep_mode: SweepMode,

    /// Known cells a neighbourhood needs before its center is filled (1-9).
    pub min_known_neighbors: usize,

    /// Upper bound on sweeps. `None` relies on stagnation detection alone.
    pub max_sweeps: Option<usize>,

    /// What to do with samples that fall outside the grid.
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            sweep_mode: SweepMode::InPlace,
            min_known_neighbors: MIN_KNOWN_NEIGHBORS,
            max_sweeps: None,
            out_of_bounds: OutOfBoundsPolicy::Reject,
        }
    }
}

impl FillConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ALTITUDE_SWEEP_MODE") {
            config.sweep_mode = SweepMode::from_str(&val);
        }

        if let Ok(val) = std::env::var("ALTITUDE_MIN_KNOWN_NEIGHBORS") {
            if let Ok(count) = val.parse() {
                config.min_known_neighbors = count;
            }
        }

        if let Ok(val) = std::env::var("ALTITUDE_MAX_SWEEPS") {
            if let Ok(sweeps) = val.parse() {
                config.max_sweeps = Some(sweeps);
            }
        }

        if let Ok(val) = std::env::var("ALTITUDE_OUT_OF_BOUNDS") {
            config.out_of_bounds = OutOfBoundsPolicy::from_str(&val);
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_known_neighbors == 0 || self.min_known_neighbors > 9 {
            return Err("min_known_neighbors must be 1-9".to_string());
        }

        if self.max_sweeps == Some(0) {
            return Err("max_sweeps must be > 0".to_string());
        }

        Ok(())
    }
}

/// How a sweep sees cells filled earlier in the same sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SweepMode {
    /// Writes land in the working grid immediately. Fills propagate towards
    /// increasing linear index within a sweep; converges in fewer sweeps.
    #[default]
    InPlace,
    /// Every sweep reads a snapshot taken when it started. Results do not
    /// depend on sweep order.
    DoubleBuffered,
}

impl SweepMode {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "double_buffered" | "double-buffered" | "double" => Self::DoubleBuffered,
            _ => Self::InPlace,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InPlace => "in_place",
            Self::DoubleBuffered => "double_buffered",
        }
    }
}

impl std::fmt::Display for SweepMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handling of samples whose coordinates fall outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// Fail the whole scatter before writing anything.
    #[default]
    Reject,
    /// Leave the sample out, log it and report it back to the caller.
    Skip,
}

impl OutOfBoundsPolicy {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "skip" => Self::Skip,
            _ => Self::Reject,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for OutOfBoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FillConfig::default();
        assert_eq!(config.sweep_mode, SweepMode::InPlace);
        assert_eq!(config.min_known_neighbors, 3);
        assert_eq!(config.max_sweeps, None);
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Reject);
    }

    #[test]
    fn test_config_validation() {
        let mut config = FillConfig::default();
        assert!(config.validate().is_ok());

        config.min_known_neighbors = 0;
        assert!(config.validate().is_err());

        config.min_known_neighbors = 10;
        assert!(config.validate().is_err());

        config = FillConfig::default();
        config.max_sweeps = Some(0);
        assert!(config.validate().is_err());

        config.max_sweeps = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sweep_mode_from_str() {
        assert_eq!(SweepMode::from_str("in_place"), SweepMode::InPlace);
        assert_eq!(
            SweepMode::from_str("DOUBLE_BUFFERED"),
            SweepMode::DoubleBuffered
        );
        assert_eq!(
            SweepMode::from_str("double-buffered"),
            SweepMode::DoubleBuffered
        );
        assert_eq!(SweepMode::from_str("invalid"), SweepMode::InPlace);
    }

    #[test]
    fn test_out_of_bounds_policy_from_str() {
        assert_eq!(OutOfBoundsPolicy::from_str("Skip"), OutOfBoundsPolicy::Skip);
        assert_eq!(OutOfBoundsPolicy::from_str("reject"), OutOfBoundsPolicy::Reject);
        assert_eq!(OutOfBoundsPolicy::from_str("other"), OutOfBoundsPolicy::Reject);
    }

    #[test]
    fn test_config_serde() {
        let config: FillConfig = serde_json::from_str(
            r#"{"sweep_mode":"double_buffered","min_known_neighbors":4,"max_sweeps":10,"out_of_bounds":"skip"}"#,
        )
        .unwrap();
        assert_eq!(config.sweep_mode, SweepMode::DoubleBuffered);
        assert_eq!(config.min_known_neighbors, 4);
        assert_eq!(config.max_sweeps, Some(10));
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Skip);
    }
}
