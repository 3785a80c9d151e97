use serde::Deserialize;
use std::path::PathBuf;

use crate::generator::WaterlineError;

fn default_radius() -> f64 {
    25.0
}
fn default_size_mm() -> f32 {
    100.0
}
fn default_water_height_mm() -> f32 {
    2.0
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `waterfront.toml`; command-line flags override them
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub water_path: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_size_mm")]
    pub size_mm: f32,
    #[serde(default = "default_water_height_mm")]
    pub water_height_mm: f32,
    #[serde(default)]
    pub waterline: WaterlineConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            seed: None,
            output: None,
            water_path: None,
            verbose: default_verbose(),
            size_mm: default_size_mm(),
            water_height_mm: default_water_height_mm(),
            waterline: WaterlineConfig::default(),
        }
    }
}

fn default_heading_tolerance() -> f64 {
    5.0
}
fn default_min_step() -> f64 {
    2.0
}
fn default_max_step() -> f64 {
    5.0
}
fn default_min_length_ratio() -> f64 {
    1.5
}
fn default_border_seek_ratio() -> f64 {
    1.25
}
fn default_center_ban_ratio() -> f64 {
    0.8
}
fn default_max_attempts() -> u32 {
    10_000
}
fn default_max_backtracks() -> u32 {
    128
}
fn default_max_path_retries() -> u32 {
    8
}

/// Tunables of the random walk that traces the waterline
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WaterlineConfig {
    /// Half-width in degrees of the window around each reference heading.
    ///
    /// Must stay below 180. Wide windows with zero weights can still cover
    /// every heading, which fails the walk with `DegenerateWeightMap`.
    #[serde(default = "default_heading_tolerance")]
    pub heading_tolerance_deg: f64,
    #[serde(default = "default_min_step")]
    pub min_step: f64,
    #[serde(default = "default_max_step")]
    pub max_step: f64,
    /// Path length, relative to the radius, required before the walk may exit
    #[serde(default = "default_min_length_ratio")]
    pub min_length_ratio: f64,
    /// Path length, relative to the radius, after which the border pulls hard
    #[serde(default = "default_border_seek_ratio")]
    pub border_seek_ratio: f64,
    /// Distance from center, relative to the radius, above which the center heading is banned
    #[serde(default = "default_center_ban_ratio")]
    pub center_ban_ratio: f64,
    /// Rejected candidates allowed per step before the walk gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Stuck steps a walk may recover from by dropping recent segments
    #[serde(default = "default_max_backtracks")]
    pub max_backtracks: u32,
    /// Whole-path restarts allowed after a retryable failure
    #[serde(default = "default_max_path_retries")]
    pub max_path_retries: u32,
    #[serde(default)]
    pub weights: WeightConfig,
}

impl Default for WaterlineConfig {
    fn default() -> Self {
        Self {
            heading_tolerance_deg: default_heading_tolerance(),
            min_step: default_min_step(),
            max_step: default_max_step(),
            min_length_ratio: default_min_length_ratio(),
            border_seek_ratio: default_border_seek_ratio(),
            center_ban_ratio: default_center_ban_ratio(),
            max_attempts: default_max_attempts(),
            max_backtracks: default_max_backtracks(),
            max_path_retries: default_max_path_retries(),
            weights: WeightConfig::default(),
        }
    }
}

impl WaterlineConfig {
    pub fn validate(&self) -> Result<(), WaterlineError> {
        if !(self.min_step > 0.0) {
            return Err(WaterlineError::InvalidConfig(format!(
                "min_step must be positive, got {}",
                self.min_step
            )));
        }
        if !(self.max_step >= self.min_step) {
            return Err(WaterlineError::InvalidConfig(format!(
                "max_step ({}) must not be below min_step ({})",
                self.max_step, self.min_step
            )));
        }
        if !(0.0..180.0).contains(&self.heading_tolerance_deg) {
            return Err(WaterlineError::InvalidConfig(format!(
                "heading_tolerance_deg must be in [0, 180), got {}",
                self.heading_tolerance_deg
            )));
        }
        if !(self.min_length_ratio >= 0.0) {
            return Err(WaterlineError::InvalidConfig(
                "min_length_ratio must not be negative".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(WaterlineError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.weights.default == 0 {
            return Err(WaterlineError::InvalidConfig(
                "weights.default must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_previous_weight() -> u32 {
    1
}
fn default_center_weight() -> u32 {
    3
}
fn default_border_weight() -> u32 {
    1
}
fn default_border_seek_weight() -> u32 {
    60
}
fn default_flat_weight() -> u32 {
    2
}

/// Relative frequencies assigned to each heading class
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WeightConfig {
    /// Near the heading back to the previous point
    #[serde(default = "default_previous_weight")]
    pub previous: u32,
    /// Near the heading to the map center
    #[serde(default = "default_center_weight")]
    pub center: u32,
    /// Near the heading to the closest border, early in the walk
    #[serde(default = "default_border_weight")]
    pub border: u32,
    /// Near the heading to the closest border, once the walk is long
    #[serde(default = "default_border_seek_weight")]
    pub border_seek: u32,
    /// Everything else
    #[serde(default = "default_flat_weight")]
    pub default: u32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            previous: default_previous_weight(),
            center: default_center_weight(),
            border: default_border_weight(),
            border_seek: default_border_seek_weight(),
            default: default_flat_weight(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("waterfront.toml"));
    paths.push(PathBuf::from(".waterfront.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("waterfront").join("config.toml"));
        paths.push(config_dir.join("waterfront.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".waterfront.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.radius, 25.0);
        assert_eq!(config.waterline, WaterlineConfig::default());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_nested_tables() {
        let config: FileConfig = toml::from_str(
            r#"
            radius = 40.0
            seed = 9

            [waterline]
            max_step = 6.5

            [waterline.weights]
            border_seek = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.radius, 40.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.waterline.max_step, 6.5);
        assert_eq!(config.waterline.min_step, 2.0);
        assert_eq!(config.waterline.weights.border_seek, 50);
        assert_eq!(config.waterline.weights.center, 3);
    }

    #[test]
    fn test_validate_rejects_inverted_steps() {
        let config = WaterlineConfig {
            min_step: 4.0,
            max_step: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WaterlineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_full_turn_tolerance() {
        for tolerance in [180.0, 270.0, -1.0, f64::NAN] {
            let config = WaterlineConfig {
                heading_tolerance_deg: tolerance,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(WaterlineError::InvalidConfig(_))),
                "tolerance {tolerance} accepted"
            );
        }
        let config = WaterlineConfig {
            heading_tolerance_deg: 179.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_default_weight() {
        let config = WaterlineConfig {
            weights: WeightConfig {
                default: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(WaterlineConfig::default().validate().is_ok());
    }
}
