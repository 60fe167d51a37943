//! Game tuning and preferences
//!
//! Everything that used to be a device-dependent constant is configured here
//! and handed to [`crate::Game::new`]. The simulation never queries the platform.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Scroll speed presets for the input device in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    #[default]
    Desktop,
    Touch,
}

impl SpeedPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Desktop => "Desktop",
            SpeedPreset::Touch => "Touch",
        }
    }

    /// Base scroll speed for this preset (pixels per tick)
    pub fn base_speed(&self) -> f32 {
        match self {
            SpeedPreset::Desktop => BASE_SPEED,
            SpeedPreset::Touch => TOUCH_BASE_SPEED,
        }
    }
}

impl FromStr for SpeedPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" | "keyboard" => Ok(SpeedPreset::Desktop),
            "touch" | "mobile" => Ok(SpeedPreset::Touch),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which preset `base_speed` was derived from
    pub preset: SpeedPreset,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Avatar ===
    pub gravity: f32,
    pub flap_velocity: f32,
    pub avatar_size: f32,
    /// Fixed horizontal centre of the avatar
    pub avatar_x: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub spacing: f32,
    pub min_margin: f32,

    // === Difficulty ===
    pub base_speed: f32,
    /// Extra speed per point scored
    pub speed_accel: f32,
    /// Upper bound on the extra speed
    pub speed_cap: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: SpeedPreset::Desktop,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            avatar_size: AVATAR_SIZE,
            avatar_x: AVATAR_X,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            spacing: OBSTACLE_SPACING,
            min_margin: GAP_MIN_MARGIN,

            base_speed: BASE_SPEED,
            speed_accel: SPEED_ACCEL,
            speed_cap: SPEED_CAP,
        }
    }
}

impl Settings {
    /// Create settings from a speed preset (applies preset defaults)
    pub fn from_preset(preset: SpeedPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a speed preset (overwrites `base_speed`)
    pub fn apply_preset(&mut self, preset: SpeedPreset) {
        self.preset = preset;
        self.base_speed = preset.base_speed();
    }

    /// Lowest allowed top edge of a gap
    pub fn gap_top_min(&self) -> f32 {
        self.min_margin
    }

    /// Highest allowed top edge of a gap
    pub fn gap_top_max(&self) -> f32 {
        self.screen_height - self.gap_height - self.min_margin
    }

    /// Fastest the obstacles can ever scroll
    pub fn max_speed(&self) -> f32 {
        self.base_speed + self.speed_cap
    }

    /// Reject settings that would leave the simulation without a valid state
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("avatar_size", self.avatar_size)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("gap_height", self.gap_height)?;
        positive("spacing", self.spacing)?;
        positive("base_speed", self.base_speed)?;
        non_negative("gravity", self.gravity)?;
        non_negative("min_margin", self.min_margin)?;
        non_negative("speed_accel", self.speed_accel)?;
        non_negative("speed_cap", self.speed_cap)?;
        non_negative("avatar_x", self.avatar_x)?;

        if !(self.flap_velocity.is_finite() && self.flap_velocity < 0.0) {
            return Err(ConfigError::FlapNotUpward(self.flap_velocity));
        }
        if self.gap_top_max() < self.gap_top_min() {
            return Err(ConfigError::EmptyGapRange {
                gap_height: self.gap_height,
                min_margin: self.min_margin,
                screen_height: self.screen_height,
            });
        }
        if self.avatar_size >= self.gap_height {
            return Err(ConfigError::AvatarTooLarge {
                avatar_size: self.avatar_size,
                gap_height: self.gap_height,
            });
        }
        if self.avatar_x > self.screen_width {
            return Err(ConfigError::AvatarOffScreen {
                avatar_x: self.avatar_x,
                screen_width: self.screen_width,
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file. Missing fields fall back to defaults.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
