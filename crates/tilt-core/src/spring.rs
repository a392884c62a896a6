//! Damped harmonic oscillator used to smooth every animated tilt quantity.
//!
//! Each spring chases a `target` that events set discontinuously; `advance`
//! integrates one semi-implicit Euler step toward it.

use crate::constants::{
    CAPTION_DAMPING, CAPTION_MASS, CAPTION_STIFFNESS, SURFACE_DAMPING, SURFACE_MASS,
    SURFACE_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConstants {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConstants {
    /// Slow, heavy settle used for rotation, scale and opacity.
    pub const SURFACE: Self = Self {
        stiffness: SURFACE_STIFFNESS,
        damping: SURFACE_DAMPING,
        mass: SURFACE_MASS,
    };

    /// Fast, light spring used for the caption flutter.
    pub const CAPTION: Self = Self {
        stiffness: CAPTION_STIFFNESS,
        damping: CAPTION_DAMPING,
        mass: CAPTION_MASS,
    };

    /// Damping ratio; 1.0 is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConstants {
    fn default() -> Self {
        Self::SURFACE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub constants: SpringConstants,
}

impl Spring {
    pub fn new(initial: f32, constants: SpringConstants) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            constants,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with no residual motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let SpringConstants {
            stiffness,
            damping,
            mass,
        } = self.constants;
        let accel = (stiffness * (self.target - self.value) - damping * self.velocity) / mass;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;
    }

    #[inline]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.value).abs() < epsilon && self.velocity.abs() < epsilon
    }
}
