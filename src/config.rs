use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    error::{ScrubError, ScrubResult},
    timing,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrubConfig {
    pub base_duration_ms: u64, // one phase at speed 1.0
    pub initial_speed: f64,
    pub tick_interval_ms: u64, // synthetic frame step for headless runs
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: timing::DEFAULT_BASE_DURATION.as_millis() as u64,
            initial_speed: timing::DEFAULT_SPEED,
            tick_interval_ms: 16,
        }
    }
}

impl ScrubConfig {
    pub fn from_json_str(s: &str) -> ScrubResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ScrubResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> ScrubResult<()> {
        if self.base_duration_ms == 0 {
            return Err(ScrubError::validation("base_duration_ms must be > 0"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ScrubError::validation("tick_interval_ms must be > 0"));
        }
        if !self.initial_speed.is_finite()
            || !(timing::MIN_SPEED..=timing::MAX_SPEED).contains(&self.initial_speed)
        {
            return Err(ScrubError::validation(format!(
                "initial_speed must be within [{}, {}]",
                timing::MIN_SPEED,
                timing::MAX_SPEED
            )));
        }
        Ok(())
    }

    pub fn base_duration(&self) -> Duration {
        Duration::from_millis(self.base_duration_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ScrubConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.base_duration(), Duration::from_secs(1));
        assert_eq!(cfg.initial_speed, 1.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = ScrubConfig::from_json_str(r#"{ "initial_speed": 1.5 }"#).unwrap();
        assert_eq!(cfg.initial_speed, 1.5);
        assert_eq!(cfg.base_duration_ms, 1000);
        assert_eq!(cfg.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for s in [
            r#"{ "base_duration_ms": 0 }"#,
            r#"{ "tick_interval_ms": 0 }"#,
            r#"{ "initial_speed": 2.5 }"#,
            r#"{ "initial_speed": -0.1 }"#,
        ] {
            let err = ScrubConfig::from_json_str(s).unwrap_err();
            assert!(matches!(err, ScrubError::Validation(_)), "{s}");
        }
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(matches!(
            ScrubConfig::from_json_str(r#"{ "speed": 1.0 }"#).unwrap_err(),
            ScrubError::Serde(_)
        ));
        assert!(matches!(
            ScrubConfig::from_json_str("{").unwrap_err(),
            ScrubError::Serde(_)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ScrubConfig::from_path(Path::new("target/definitely/missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
