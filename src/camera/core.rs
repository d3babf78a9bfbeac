use glam::{Mat4, Vec2, Vec3};

/// Default eye position in world space.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
/// Default forward axis (looking down -Z in a right-handed, Y-up world).
pub const DEFAULT_FRONT: Vec3 = Vec3::NEG_Z;

// Pitch stops short of ±90° so the forward axis never lines up with
// world up and the view basis stays well-formed.
const PITCH_LIMIT: f32 = 89.0;
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_FOV: f32 = 45.0;
const DEFAULT_MOVE_SPEED: f32 = 2.3;
const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;

/// First-person fly camera: eye position, yaw/pitch orientation, and a
/// zoomable vertical field of view.
///
/// All fields are private. Orientation is stored as yaw/pitch angles in
/// degrees and the forward axis is recomputed from them on every change,
/// so it can never drift from the angles; pitch stays inside ±89° and the
/// field of view inside [1°, 45°] no matter what deltas arrive. There are
/// no error paths; every input is raw float data and every internal
/// parameter self-clamps.
///
/// Movement takes the frame's elapsed seconds (`dt`) as supplied by the
/// host; sign and magnitude are deliberately not validated. A host that
/// wants a sprint key multiplies `dt` before the call.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    move_speed: f32,
    look_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            front: DEFAULT_FRONT,
            up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            fov: DEFAULT_FOV,
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

impl Camera {
    /// Create a camera at an explicit pose.
    ///
    /// `fov` is clamped to [1°, 45°]. `front` is normalized (a zero-length
    /// direction falls back to [`DEFAULT_FRONT`]) and yaw/pitch are derived
    /// from it, then the stored forward axis is recomputed from those
    /// angles; orientation state is the angles, never the raw vector.
    #[must_use]
    pub fn new(fov: f32, position: Vec3, front: Vec3) -> Self {
        let dir = front.normalize_or(DEFAULT_FRONT);
        let yaw = dir.z.atan2(dir.x).to_degrees();
        let pitch = dir
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        Self {
            position,
            front: front_from_angles(yaw, pitch),
            up: Vec3::Y,
            yaw,
            pitch,
            fov: fov.clamp(FOV_MIN, FOV_MAX),
            ..Self::default()
        }
    }

    /// Override the movement speed (world units/second) and look
    /// sensitivity (degrees per input unit). Both are fixed for the
    /// camera's lifetime afterwards.
    #[must_use]
    pub fn with_tuning(mut self, move_speed: f32, look_sensitivity: f32) -> Self {
        self.move_speed = move_speed;
        self.look_sensitivity = look_sensitivity;
        self
    }

    /// Advance along the forward axis by `move_speed * dt`.
    pub fn move_forward(&mut self, dt: f32) {
        self.position += self.front * (self.move_speed * dt);
    }

    /// Retreat along the forward axis by `move_speed * dt`.
    pub fn move_backward(&mut self, dt: f32) {
        self.position -= self.front * (self.move_speed * dt);
    }

    /// Strafe left by `move_speed * dt`.
    pub fn move_left(&mut self, dt: f32) {
        self.position -= self.right_axis() * (self.move_speed * dt);
    }

    /// Strafe right by `move_speed * dt`.
    pub fn move_right(&mut self, dt: f32) {
        self.position += self.right_axis() * (self.move_speed * dt);
    }

    /// Apply a cursor delta (input units, positive y = look up).
    ///
    /// The delta is scaled by the look sensitivity, added to yaw/pitch,
    /// and the forward axis is recomputed. Pitch clamps at ±89°.
    pub fn look(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.look_sensitivity;
        self.pitch = (self.pitch + delta.y * self.look_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    /// Apply a scroll delta: positive narrows the field of view (zooms
    /// in). The result clamps to [1°, 45°].
    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta).clamp(FOV_MIN, FOV_MAX);
    }

    /// Build the world-to-eye transform from the current pose.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Build a perspective projection from the current field of view.
    ///
    /// Uses the OpenGL clip-space convention (NDC z in [-1, 1]). `aspect`
    /// is width/height; the host owns window size and derives it. Near and
    /// far planes are taken as-is; degenerate planes produce a degenerate
    /// matrix, which is the caller's concern.
    #[must_use]
    pub fn build_projection(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect, znear, zfar)
    }

    /// Eye position in world space (needed by lighting code).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward axis.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// World up reference (fixed; no roll support).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees (unbounded; wraps via trig periodicity).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always inside [-89, 89].
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, always inside [1, 45].
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    // Derived fresh on every call; front may have changed since the
    // previous frame.
    fn right_axis(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }
}

/// Forward axis from yaw/pitch degrees. Yaw = -90° yields (0, 0, -1).
fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// GPU uniform staging for the per-frame camera state.
///
/// Both matrices are column-major, ready for upload as-is; the eye
/// position rides along for lighting.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip transform.
    pub proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fov: DEFAULT_FOV,
        }
    }

    /// Refresh every field from the given camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32, znear: f32, zfar: f32) {
        self.view = camera.build_view().to_cols_array_2d();
        self.proj = camera.build_projection(aspect, znear, zfar).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fov = camera.fov();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const TOL: f32 = 1e-5;

    #[test]
    fn default_faces_negative_z() {
        let cam = Camera::default();
        assert!((cam.front() - Vec3::NEG_Z).length() < TOL);
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
        assert_eq!(cam.fov(), 45.0);
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn front_stays_unit_under_look_sequences() {
        let mut cam = Camera::default();
        let deltas = [
            (12.5, -3.0),
            (-400.0, 250.0),
            (0.3, 0.01),
            (5000.0, -5000.0),
            (-0.7, 899.0),
        ];
        for (dx, dy) in deltas {
            cam.look(Vec2::new(dx, dy));
            assert!((cam.front().length() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn pitch_clamps_at_the_poles() {
        let mut cam = Camera::default();
        for _ in 0..50 {
            cam.look(Vec2::new(0.0, 100.0));
        }
        assert_eq!(cam.pitch(), 89.0);

        for _ in 0..100 {
            cam.look(Vec2::new(0.0, -100.0));
        }
        assert_eq!(cam.pitch(), -89.0);
        assert!((cam.front().length() - 1.0).abs() < TOL);
    }

    #[test]
    fn fov_clamps_to_range() {
        let mut cam = Camera::default();
        cam.zoom(1000.0);
        assert_eq!(cam.fov(), 1.0);
        cam.zoom(-1000.0);
        assert_eq!(cam.fov(), 45.0);
        cam.zoom(5.0);
        assert_eq!(cam.fov(), 40.0);
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(123.0, 45.0));
        let start = cam.position();
        cam.move_forward(0.75);
        cam.move_backward(0.75);
        assert!((cam.position() - start).length() < TOL);
    }

    #[test]
    fn strafe_is_orthogonal_to_basis() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(31.0, -14.0));
        let before = cam.position();
        cam.move_right(0.5);
        let displacement = cam.position() - before;
        assert!(displacement.dot(cam.front()).abs() < TOL);
        assert!(displacement.dot(cam.up()).abs() < TOL);
    }

    #[test]
    fn view_maps_eye_to_origin() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(200.0, -100.0));
        cam.move_left(1.3);
        let eye = cam.build_view() * cam.position().extend(1.0);
        assert!(eye.truncate().length() < 1e-4);
        assert!((eye.w - 1.0).abs() < TOL);
    }

    #[test]
    fn projection_hits_gl_clip_planes() {
        let cam = Camera::default();
        let proj = cam.build_projection(1.0, 0.1, 100.0);

        let near = proj * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);

        let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn default_view_is_look_at_toward_negative_z() {
        let mut cam = Camera::default();
        cam.look(Vec2::ZERO);

        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(cam.build_view().abs_diff_eq(expected, 1e-6));

        cam.move_forward(1.0);
        assert!((cam.position() - Vec3::new(0.0, 0.0, 3.0 - 2.3)).length() < TOL);
    }

    #[test]
    fn explicit_front_derives_angles() {
        let cam = Camera::new(
            30.0,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, -5.0),
        );
        assert!((cam.front() - Vec3::NEG_Z).length() < TOL);
        assert!((cam.yaw() - -90.0).abs() < 1e-3);
        assert_eq!(cam.pitch(), 0.0);
        assert_eq!(cam.fov(), 30.0);
        assert_eq!(cam.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn degenerate_front_falls_back_to_default() {
        let cam = Camera::new(45.0, Vec3::ZERO, Vec3::ZERO);
        assert!((cam.front() - Vec3::NEG_Z).length() < TOL);
    }

    #[test]
    fn steep_initial_front_respects_pitch_clamp() {
        let cam = Camera::new(45.0, Vec3::ZERO, Vec3::Y);
        assert_eq!(cam.pitch(), 89.0);
        assert!((cam.front().length() - 1.0).abs() < TOL);
    }

    #[test]
    fn constructor_clamps_fov() {
        assert_eq!(Camera::new(0.2, Vec3::ZERO, Vec3::NEG_Z).fov(), 1.0);
        assert_eq!(Camera::new(120.0, Vec3::ZERO, Vec3::NEG_Z).fov(), 45.0);
    }

    #[test]
    fn uniform_packs_current_state() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(57.0, 19.0));
        cam.move_right(2.0);

        let mut uniform = CameraUniform::new();
        uniform.update(&cam, 1.6, 0.1, 100.0);

        assert_eq!(uniform.view, cam.build_view().to_cols_array_2d());
        assert_eq!(
            uniform.proj,
            cam.build_projection(1.6, 0.1, 100.0).to_cols_array_2d()
        );
        assert_eq!(uniform.position, cam.position().to_array());
        assert_eq!(uniform.fov, cam.fov());
    }
}
