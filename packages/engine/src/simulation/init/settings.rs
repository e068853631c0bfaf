//! World settings
//!
//! Parsed from camelCase JSON by the host; every field has a default so `{}` is a
//! valid settings document. Immutable once the world is built.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::spatial::grid::DEFAULT_JITTER_CHANCE;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub physics_interval_ms: f64,
    pub render_interval_ms: f64,
    /// `None` seeds from the host clock.
    pub seed: Option<u64>,
    pub jitter: bool,
    pub jitter_chance: f32,
    pub perf_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 200,
            height: 150,
            physics_interval_ms: 15.0,
            render_interval_ms: 15.0,
            seed: None,
            jitter: true,
            jitter_chance: DEFAULT_JITTER_CHANCE,
            perf_enabled: false,
        }
    }
}

impl Settings {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).map_err(EngineError::SettingsParse)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidSettings(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if (self.width as u64) * (self.height as u64) > u32::MAX as u64 {
            return Err(EngineError::InvalidSettings(format!(
                "grid {}x{} has too many cells",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("physicsIntervalMs", self.physics_interval_ms),
            ("renderIntervalMs", self.render_interval_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidSettings(format!(
                    "{} must be a finite, non-negative number of milliseconds",
                    name
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.jitter_chance) {
            return Err(EngineError::InvalidSettings(
                "jitterChance must be within [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_jitter(world: &mut WorldCore, enabled: bool) {
    world.jitter = enabled;
}
