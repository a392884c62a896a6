//! Per-card configuration and its string override layer.

use crate::constants::*;
use crate::spring::SpringConstants;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("`{field}` must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
}

/// Keys accepted by [`TiltConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 5] = [
    "rotate-amplitude",
    "scale-on-hover",
    "device-factor",
    "mobile-breakpoint",
    "caption-velocity-scale",
];

/// Spring constants for each smoothed quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSet {
    pub rotation: SpringConstants,
    pub scale: SpringConstants,
    pub opacity: SpringConstants,
    pub caption: SpringConstants,
}

impl Default for SpringSet {
    fn default() -> Self {
        Self {
            rotation: SpringConstants::SURFACE,
            scale: SpringConstants::SURFACE,
            opacity: SpringConstants::SURFACE,
            caption: SpringConstants::CAPTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    /// Tilt in degrees when the pointer sits on the surface edge.
    pub rotate_amplitude: f32,
    pub scale_on_hover: f32,
    /// Multiplier on `rotate_amplitude` for viewports at or below the breakpoint.
    pub device_factor: f32,
    pub mobile_breakpoint_px: f32,
    pub caption_velocity_scale: f32,
    pub springs: SpringSet,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_amplitude: ROTATE_AMPLITUDE_DEG,
            scale_on_hover: SCALE_ON_HOVER,
            device_factor: MOBILE_DEVICE_FACTOR,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            caption_velocity_scale: CAPTION_VELOCITY_SCALE,
            springs: SpringSet::default(),
        }
    }
}

impl TiltConfig {
    #[inline]
    pub fn is_mobile(&self, viewport_width: f32) -> bool {
        viewport_width <= self.mobile_breakpoint_px
    }

    #[inline]
    pub fn device_factor_for(&self, viewport_width: f32) -> f32 {
        if self.is_mobile(viewport_width) {
            self.device_factor
        } else {
            1.0
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("rotate_amplitude", self.rotate_amplitude)?;
        positive("scale_on_hover", self.scale_on_hover)?;
        non_negative("device_factor", self.device_factor)?;
        non_negative("mobile_breakpoint_px", self.mobile_breakpoint_px)?;
        finite("caption_velocity_scale", self.caption_velocity_scale)?;
        let SpringSet {
            rotation,
            scale,
            opacity,
            caption,
        } = &self.springs;
        for c in [rotation, scale, opacity, caption] {
            non_negative("stiffness", c.stiffness)?;
            non_negative("damping", c.damping)?;
            positive("mass", c.mass)?;
        }
        Ok(())
    }

    /// Apply one `key=value` override, as found in a card's `data-*`
    /// attributes. Keys use the kebab-case attribute names. On error the
    /// config is left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        let slot = next
            .field_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        *slot = parse_number(value).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut f32> {
        match key {
            "rotate-amplitude" => Some(&mut self.rotate_amplitude),
            "scale-on-hover" => Some(&mut self.scale_on_hover),
            "device-factor" => Some(&mut self.device_factor),
            "mobile-breakpoint" => Some(&mut self.mobile_breakpoint_px),
            "caption-velocity-scale" => Some(&mut self.caption_velocity_scale),
            _ => None,
        }
    }

    /// Build a config from defaults plus a list of overrides. Stops at the
    /// first bad entry.
    pub fn from_overrides<'a, I>(overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (k, v) in overrides {
            cfg.apply_override(k, v)?;
        }
        Ok(cfg)
    }
}

// Accepts plain numbers and CSS-style pixel values ("768px").
fn parse_number(raw: &str) -> Option<f32> {
    let s = raw.trim();
    let s = s.strip_suffix("px").unwrap_or(s).trim_end();
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "finite",
            value,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: ">= 0",
            value,
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            requirement: "> 0",
            value,
        })
    }
}
