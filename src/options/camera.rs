use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees (effective range 1–45).
    pub fov: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per input unit.
    pub look_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 45.0,
            znear: 0.1,
            zfar: 100.0,
            move_speed: 2.3,
            look_sensitivity: 0.1,
        }
    }
}
