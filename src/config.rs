//! Pager configuration
//!
//! `PagerConfig` is validated once, at construction, and is immutable after.
//! It can be built in code, through a builder, or parsed from YAML/JSON.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// PagerConfig
// ============================================================================

/// Validated pager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagerConfig")]
pub struct PagerConfig {
    /// Number of pages fetched by `load_initial_pages`
    initial_load_size: usize,
    /// Number of pages fetched per preload trigger
    load_size: usize,
    /// Distance from either end of the window that triggers a preload
    pre_load_distance: usize,
}

impl PagerConfig {
    /// Create a validated config
    ///
    /// Values are checked in order: `initial_load_size`, `load_size`,
    /// `pre_load_distance`. The first violation is the one reported.
    pub fn new(
        initial_load_size: i64,
        load_size: i64,
        pre_load_distance: i64,
    ) -> Result<Self, ConfigError> {
        if initial_load_size <= 0 {
            return Err(ConfigError::IllegalInitialLoadSize);
        }
        if load_size <= 0 {
            return Err(ConfigError::IllegalLoadSize);
        }
        if pre_load_distance < 0 {
            return Err(ConfigError::IllegalPreLoadDistance);
        }

        Ok(Self {
            initial_load_size: to_usize(initial_load_size, ConfigError::IllegalInitialLoadSize)?,
            load_size: to_usize(load_size, ConfigError::IllegalLoadSize)?,
            pre_load_distance: to_usize(pre_load_distance, ConfigError::IllegalPreLoadDistance)?,
        })
    }

    /// Create a new config builder
    pub fn builder() -> PagerConfigBuilder {
        PagerConfigBuilder::default()
    }

    /// Number of pages fetched by `load_initial_pages`
    pub fn initial_load_size(&self) -> usize {
        self.initial_load_size
    }

    /// Number of pages fetched per preload trigger
    pub fn load_size(&self) -> usize {
        self.load_size
    }

    /// Preload trigger distance, in pages
    pub fn pre_load_distance(&self) -> usize {
        self.pre_load_distance
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial_load_size: 1,
            load_size: 1,
            pre_load_distance: 1,
        }
    }
}

fn to_usize(value: i64, err: ConfigError) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| err)
}

/// Unvalidated shape used for deserialization
#[derive(Debug, Clone, Deserialize)]
struct RawPagerConfig {
    #[serde(default = "default_size")]
    initial_load_size: i64,
    #[serde(default = "default_size")]
    load_size: i64,
    #[serde(default = "default_size")]
    pre_load_distance: i64,
}

fn default_size() -> i64 {
    1
}

impl TryFrom<RawPagerConfig> for PagerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPagerConfig) -> Result<Self, Self::Error> {
        Self::new(raw.initial_load_size, raw.load_size, raw.pre_load_distance)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for `PagerConfig`, validated on `build`
#[derive(Debug, Clone)]
pub struct PagerConfigBuilder {
    initial_load_size: i64,
    load_size: i64,
    pre_load_distance: i64,
}

impl Default for PagerConfigBuilder {
    fn default() -> Self {
        Self {
            initial_load_size: 1,
            load_size: 1,
            pre_load_distance: 1,
        }
    }
}

impl PagerConfigBuilder {
    /// Set the number of pages loaded up front
    pub fn initial_load_size(mut self, size: i64) -> Self {
        self.initial_load_size = size;
        self
    }

    /// Set the number of pages loaded per preload
    pub fn load_size(mut self, size: i64) -> Self {
        self.load_size = size;
        self
    }

    /// Set the preload trigger distance
    pub fn pre_load_distance(mut self, distance: i64) -> Self {
        self.pre_load_distance = distance;
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<PagerConfig, ConfigError> {
        PagerConfig::new(
            self.initial_load_size,
            self.load_size,
            self.pre_load_distance,
        )
    }
}

// ============================================================================
// File Loading
// ============================================================================

/// Load a pager config from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
///
/// # Examples
///
/// ```ignore
/// let config = load_config("./pager.yaml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_config_from_json(&content)
    } else {
        load_config_from_str(&content)
    }
}

/// Load a pager config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| unwrap_validation(e.to_string()))
}

/// Load a pager config from a JSON string
pub fn load_config_from_json(json: &str) -> Result<PagerConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| unwrap_validation(e.to_string()))
}

/// Serde flattens `try_from` failures into its own error type; map the
/// validation messages back onto their variants.
fn unwrap_validation(message: String) -> ConfigError {
    let checks = [
        ConfigError::IllegalInitialLoadSize,
        ConfigError::IllegalLoadSize,
        ConfigError::IllegalPreLoadDistance,
    ];
    for check in checks {
        if message.contains(&check.to_string()) {
            return check;
        }
    }
    ConfigError::parse(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_valid_config() {
        let config = PagerConfig::new(2, 3, 0).unwrap();
        assert_eq!(config.initial_load_size(), 2);
        assert_eq!(config.load_size(), 3);
        assert_eq!(config.pre_load_distance(), 0);
    }

    #[test]
    fn test_default_config() {
        let config = PagerConfig::default();
        assert_eq!(config, PagerConfig::new(1, 1, 1).unwrap());
    }

    #[test_case(0, 1, 1 ; "initial load size of zero")]
    #[test_case(-1, 1, 1 ; "negative initial load size")]
    #[test_case(0, 0, -1 ; "initial load size reported first")]
    fn test_illegal_initial_load_size(initial: i64, load: i64, distance: i64) {
        let err = PagerConfig::new(initial, load, distance).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalInitialLoadSize));
    }

    #[test_case(1, 0, 1 ; "load size of zero")]
    #[test_case(1, -1, 1 ; "negative load size")]
    #[test_case(1, 0, -1 ; "load size reported before distance")]
    fn test_illegal_load_size(initial: i64, load: i64, distance: i64) {
        let err = PagerConfig::new(initial, load, distance).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalLoadSize));
    }

    #[test]
    fn test_illegal_pre_load_distance() {
        let err = PagerConfig::new(1, 1, -1).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalPreLoadDistance));
    }

    #[test]
    fn test_builder() {
        let config = PagerConfig::builder()
            .initial_load_size(4)
            .load_size(2)
            .pre_load_distance(3)
            .build()
            .unwrap();
        assert_eq!(config, PagerConfig::new(4, 2, 3).unwrap());

        let err = PagerConfig::builder().load_size(0).build().unwrap_err();
        assert!(matches!(err, ConfigError::IllegalLoadSize));
    }

    #[test]
    fn test_load_config_from_yaml() {
        let yaml = r"
initial_load_size: 3
load_size: 2
pre_load_distance: 1
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config, PagerConfig::new(3, 2, 1).unwrap());
    }

    #[test]
    fn test_load_config_defaults_missing_fields() {
        let config = load_config_from_str("load_size: 5").unwrap();
        assert_eq!(config, PagerConfig::new(1, 5, 1).unwrap());
    }

    #[test]
    fn test_load_config_rejects_illegal_values() {
        let err = load_config_from_str("pre_load_distance: -2").unwrap_err();
        assert!(matches!(err, ConfigError::IllegalPreLoadDistance));

        let err = load_config_from_json(r#"{"initial_load_size": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalInitialLoadSize));
    }

    #[test]
    fn test_load_config_syntax_error() {
        let err = load_config_from_str("load_size: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("pager.yaml");
        fs::write(&yaml_path, "initial_load_size: 2\nload_size: 3\n").unwrap();
        assert_eq!(
            load_config(&yaml_path).unwrap(),
            PagerConfig::new(2, 3, 1).unwrap()
        );

        let json_path = dir.path().join("pager.json");
        fs::write(&json_path, r#"{"pre_load_distance": 4}"#).unwrap();
        assert_eq!(
            load_config(&json_path).unwrap(),
            PagerConfig::new(1, 1, 4).unwrap()
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/pager.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_config_serializes_validated_fields() {
        let config = PagerConfig::new(2, 3, 1).unwrap();
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"initial_load_size": 2, "load_size": 3, "pre_load_distance": 1})
        );
    }
}
