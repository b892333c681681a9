//! Tuning parameters and play-field dimensions
//!
//! One immutable `GameParams` value per layout class, threaded explicitly
//! through spawning and physics. Hosts may override any option from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::{COMPACT_WIDTH_THRESHOLD, HITBOX_INSET, WIN_SCORE};
use crate::error::ConfigError;

/// Coarse device signal selecting a parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutClass {
    /// Narrow, portrait-ish viewports (phones)
    Compact,
    #[default]
    Standard,
}

impl LayoutClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutClass::Compact => "Compact",
            LayoutClass::Standard => "Standard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" | "mobile" => Some(LayoutClass::Compact),
            "standard" | "desktop" => Some(LayoutClass::Standard),
            _ => None,
        }
    }

    /// Classify a viewport by its width
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= COMPACT_WIDTH_THRESHOLD {
            LayoutClass::Compact
        } else {
            LayoutClass::Standard
        }
    }
}

/// Gameplay tuning for one layout class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameParams {
    /// Avatar width
    pub face_width: f32,
    /// Avatar height
    pub face_height: f32,
    /// Horizontal scroll per tick for obstacles and collectibles
    pub scroll_speed: f32,
    /// Vertical size of the passable band in each obstacle
    pub gap_size: f32,
    /// Collectible edge length
    pub coin_size: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub impulse: f32,
    /// Frames between obstacle spawns
    pub obstacle_interval: u32,
    /// Frames between collectible spawns
    pub collectible_interval: u32,
    /// Score that wins the round
    pub win_score: u32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self::for_layout(LayoutClass::Standard)
    }
}

impl GameParams {
    /// Built-in parameter set for a layout class (always valid)
    pub fn for_layout(layout: LayoutClass) -> Self {
        match layout {
            // Slower, floatier and sparser on small screens
            LayoutClass::Compact => Self {
                face_width: 40.0,
                face_height: 40.0,
                scroll_speed: 1.0,
                gap_size: 140.0,
                coin_size: 25.0,
                gravity: 0.3,
                impulse: -7.0,
                obstacle_interval: 120,
                collectible_interval: 100,
                win_score: WIN_SCORE,
            },
            LayoutClass::Standard => Self {
                face_width: 50.0,
                face_height: 50.0,
                scroll_speed: 2.5,
                gap_size: 150.0,
                coin_size: 30.0,
                gravity: 0.4,
                impulse: -8.0,
                obstacle_interval: 100,
                collectible_interval: 80,
                win_score: WIN_SCORE,
            },
        }
    }

    /// Check every option, failing on the first bad one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.obstacle_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "obstacle_interval",
            });
        }
        if self.collectible_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "collectible_interval",
            });
        }

        for (name, value) in [
            ("face_width", self.face_width),
            ("face_height", self.face_height),
            ("scroll_speed", self.scroll_speed),
            ("gap_size", self.gap_size),
            ("coin_size", self.coin_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        // Anything smaller leaves an empty or inverted hitbox
        let min_face = 2.0 * HITBOX_INSET;
        for (name, value) in [
            ("face_width", self.face_width),
            ("face_height", self.face_height),
        ] {
            if value <= min_face {
                return Err(ConfigError::FaceTooSmall {
                    name,
                    value,
                    min: min_face,
                });
            }
        }

        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "gravity",
                value: self.gravity,
            });
        }
        if !(self.impulse.is_finite() && self.impulse < 0.0) {
            return Err(ConfigError::ImpulseNotUpward(self.impulse));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Parse overrides on top of the standard layout
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_json_with_base(json, LayoutClass::Standard)
    }

    /// Parse overrides on top of a layout's built-in set
    ///
    /// The document must be an object of known option names; missing keys
    /// keep the base value.
    pub fn from_json_with_base(json: &str, base: LayoutClass) -> Result<Self, ConfigError> {
        let params = Self::merge_overrides(json, base).and_then(|params| {
            params.validate()?;
            Ok(params)
        });
        if let Err(e) = &params {
            log::warn!("Rejected parameter overrides: {}", e);
        }
        params
    }

    fn merge_overrides(json: &str, base: LayoutClass) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(source) = overrides else {
            return Err(ConfigError::NotAnObject);
        };

        let mut merged = serde_json::to_value(Self::for_layout(base))?;
        let serde_json::Value::Object(target) = &mut merged else {
            return Err(ConfigError::NotAnObject);
        };
        for (key, value) in source {
            if !target.contains_key(&key) {
                return Err(ConfigError::UnknownKey(key));
            }
            target.insert(key, value);
        }

        Ok(serde_json::from_value(merged)?)
    }
}

/// Play-field dimensions (display surface in simulation units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidField { width, height });
        }
        Ok(Self { width, height })
    }

    /// Y coordinate where the ground band starts
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - crate::consts::GROUND_HEIGHT
    }
}
