use glam::{Mat4, Vec2};

use crate::camera::core::{Camera, CameraUniform, DEFAULT_FRONT, DEFAULT_POSITION};
use crate::input::{FrameInput, MoveAction};
use crate::options::CameraOptions;

/// Per-frame driver binding a [`Camera`] to the input protocol.
///
/// Owns what the camera deliberately does not: the viewport aspect ratio,
/// the near/far clip planes, and the staged [`CameraUniform`]. The host
/// drives it in a strict per-frame order: feed events to the input
/// processor, [`apply`](Self::apply) the drained frame, then read the
/// matrices or [`update_uniform`](Self::update_uniform) for upload.
pub struct CameraController {
    /// The driven camera. Public so hosts can read state or apply
    /// out-of-band moves; the invariants live inside [`Camera`] itself.
    pub camera: Camera,

    aspect: f32,
    znear: f32,
    zfar: f32,
    uniform: CameraUniform,
}

impl CameraController {
    /// Build a controller from configuration at the default pose.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera::new(options.fov, DEFAULT_POSITION, DEFAULT_FRONT)
            .with_tuning(options.move_speed, options.look_sensitivity);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, aspect, options.znear, options.zfar);

        Self {
            camera,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
            uniform,
        }
    }

    /// Recompute the aspect ratio from physical pixel dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Apply one frame's worth of input.
    ///
    /// Movement first (each held action once, displaced by the camera's
    /// fixed speed times `dt`), then the look delta, then the scroll zoom.
    /// Movement therefore uses the orientation the frame started with.
    pub fn apply(&mut self, frame: &FrameInput, dt: f32) {
        if frame.is_held(MoveAction::Forward) {
            self.camera.move_forward(dt);
        }
        if frame.is_held(MoveAction::Backward) {
            self.camera.move_backward(dt);
        }
        if frame.is_held(MoveAction::Left) {
            self.camera.move_left(dt);
        }
        if frame.is_held(MoveAction::Right) {
            self.camera.move_right(dt);
        }
        if frame.look != Vec2::ZERO {
            self.camera.look(frame.look);
        }
        if frame.scroll != 0.0 {
            self.camera.zoom(frame.scroll);
        }
    }

    /// World-to-eye transform for the current pose.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        self.camera.build_view()
    }

    /// Eye-to-clip transform using the stored aspect and clip planes.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        self.camera.build_projection(self.aspect, self.znear, self.zfar)
    }

    /// Refresh the staged uniform from the current camera state and
    /// return it for upload.
    pub fn update_uniform(&mut self) -> &CameraUniform {
        self.uniform
            .update(&self.camera, self.aspect, self.znear, self.zfar);
        &self.uniform
    }

    /// Current viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}
