// Compositor configuration

use super::tables::CameraRotation;
use super::AnimationError;
use serde::Deserialize;

/// Frames never advance faster than this, in milliseconds
pub const MIN_FRAME_DURATION_MS: f64 = 100.0;

/// Size of one source pixel in world units
pub const ONE_PIXEL_SIZE: f32 = 1.0 / 35.0;

/// Global scale applied to every sprite layer
pub const SPRITE_SCALE_FACTOR: f32 = 1.0;

/// Immutable settings shared by every character the compositor resolves
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Global scale applied on top of each layer's own scale
    pub sprite_scale_factor: f32,
    /// Source pixels to world units
    pub pixel_to_world_unit: f32,
    /// Floor for the duration of a single frame
    pub min_frame_duration_ms: f64,
    /// Multiplier on authored frame delays (2.0 = half speed)
    pub animation_speed_scale: f64,
    /// Fixed camera rotation applied to every facing
    pub camera_rotation: CameraRotation,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            sprite_scale_factor: SPRITE_SCALE_FACTOR,
            pixel_to_world_unit: ONE_PIXEL_SIZE,
            min_frame_duration_ms: MIN_FRAME_DURATION_MS,
            animation_speed_scale: 1.0,
            camera_rotation: CameraRotation::default(),
        }
    }
}

impl CompositorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_sprite_scale_factor(mut self, factor: f32) -> Self {
        self.sprite_scale_factor = factor;
        self
    }

    pub fn with_pixel_to_world_unit(mut self, unit: f32) -> Self {
        self.pixel_to_world_unit = unit;
        self
    }

    pub fn with_min_frame_duration_ms(mut self, ms: f64) -> Self {
        self.min_frame_duration_ms = ms;
        self
    }

    pub fn with_animation_speed_scale(mut self, scale: f64) -> Self {
        self.animation_speed_scale = scale;
        self
    }

    pub fn with_camera_rotation(mut self, rotation: CameraRotation) -> Self {
        self.camera_rotation = rotation;
        self
    }

    /// Reject values that would make sizes or frame timing meaningless
    pub fn validate(&self) -> Result<(), AnimationError> {
        check_positive("sprite_scale_factor", f64::from(self.sprite_scale_factor))?;
        check_positive("pixel_to_world_unit", f64::from(self.pixel_to_world_unit))?;
        check_positive("min_frame_duration_ms", self.min_frame_duration_ms)?;
        check_positive("animation_speed_scale", self.animation_speed_scale)?;
        Ok(())
    }

    /// Combined scale from source pixels to world units
    pub fn pixel_scale(&self) -> f32 {
        self.sprite_scale_factor * self.pixel_to_world_unit
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), AnimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnimationError::InvalidConfig { field, value })
    }
}
