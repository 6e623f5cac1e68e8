use std::f32::consts::PI;

// Shared tuning constants for the globe launcher. Values are carried over
// from the shipped visual design; treat them as tuned, not derived.

// Sphere geometry
pub const GLOBE_RADIUS: f32 = 1.0; // body of the globe, also the pick occluder
pub const ICON_RADIUS: f32 = 1.35; // shell the app icons sit on

// Visibility
/// Front-facing cutoff for `dot(normalize(viewpoint), normalize(position))`.
///
/// Deliberately below zero: markers up to ~101 degrees off the view axis
/// still count as front-facing, so icons fade a little past the silhouette
/// instead of popping out exactly at the horizon. The comparison is strict
/// `>`, so a dot of exactly -0.2 is back-facing.
pub const VISIBILITY_THRESHOLD: f32 = -0.2;
pub const VISIBLE_OPACITY: f32 = 0.85;
pub const HIDDEN_OPACITY: f32 = 0.05;

// Visual sizing
pub const ICON_SIZE: f32 = 0.22; // idle icon quad edge, world units
pub const SELECTED_SCALE_MULTIPLIER: f32 = 1.25;
pub const HOVER_BRIGHTEN: f32 = 1.4;

// Motion
pub const SPIN_SPEED: f32 = 0.08; // globe auto-rotation, rad/s about +Y
pub const FLOAT_SPEED: f32 = 0.5; // per-icon bob frequency scale
pub const FLOAT_AMPLITUDE: f32 = 0.02;
pub const FLOAT_PHASE_X: f32 = 100.0; // de-phases the bob per icon
pub const FLOAT_PHASE_Y: f32 = 50.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.16; // ray-sphere radius per icon

// Camera
pub const CAMERA_DISTANCE: f32 = 3.2;
pub const CAMERA_FOVY_RADIANS: f32 = PI / 4.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const MIN_POLAR_ANGLE: f32 = PI / 3.0; // orbit tilt clamps
pub const MAX_POLAR_ANGLE: f32 = PI / 1.5;

/// Golden ratio used as the irrational azimuthal increment of the layout.
#[inline]
pub fn golden_ratio() -> f32 {
    (1.0 + 5.0_f32.sqrt()) / 2.0
}
