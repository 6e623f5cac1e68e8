//! The per-frame globe controller.
//!
//! Owns the static marker set plus the small amount of cross-frame state
//! the launcher needs: the globe spin angle, the hover index, the current
//! selection, and the previous frame's visibility flags (used only when a
//! degenerate viewpoint makes the predicate undecidable). Everything else
//! in [`GlobeScene::frame`] is recomputed fresh from the current positions
//! and viewpoint each call.

use crate::apps::AppEntry;
use crate::constants::{
    FLOAT_AMPLITUDE, FLOAT_PHASE_X, FLOAT_PHASE_Y, FLOAT_SPEED, HIDDEN_OPACITY, HOVER_BRIGHTEN,
    ICON_SIZE, PICK_SPHERE_RADIUS, SELECTED_SCALE_MULTIPLIER, SPIN_SPEED, VISIBLE_OPACITY,
};
use crate::error::LayoutError;
use crate::marker::{Marker, MarkerSet};
use crate::picking::{ray_sphere, screen_to_world_ray};
use crate::state::Camera;
use crate::visibility::{is_front_facing, outward_transform};
use glam::{Mat4, Quat, Vec3, Vec4};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Outward callback invoked with a marker's stable slug when a pick
/// resolves to it. What happens next (navigation, launch) is the
/// caller's business.
pub type PickHandler = Box<dyn FnMut(&'static str)>;

/// Render-ready description of one marker for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct MarkerFrame {
    pub slug: &'static str,
    /// World transform: outward billboard orientation, uniform scale,
    /// spun/floated translation.
    pub model: Mat4,
    /// RGB accent color; alpha carries the opacity.
    pub color: Vec4,
    pub front_facing: bool,
    /// Label overlays are suppressed entirely for back-facing markers,
    /// not just faded, so far-side text never stacks unreadably.
    pub label_visible: bool,
    pub selected: bool,
    pub world_position: Vec3,
}

/// One frame's worth of marker output. Sized for the launcher catalog so
/// the per-frame path normally allocates nothing.
pub type FrameSnapshot = SmallVec<[MarkerFrame; 32]>;

pub struct GlobeScene {
    markers: MarkerSet,
    globe_radius: f32,
    elapsed: f32,
    spin: f32,
    hover: Option<usize>,
    prev_front: Vec<bool>,
    pick_handler: Option<PickHandler>,
}

impl GlobeScene {
    /// Build the scene: catalog entries laid out on a shell of
    /// `icon_radius` around a globe body of `globe_radius`.
    pub fn new(
        entries: &'static [AppEntry],
        globe_radius: f32,
        icon_radius: f32,
    ) -> Result<Self, LayoutError> {
        let markers = MarkerSet::on_sphere(entries, icon_radius)?;
        // Markers start front-facing; nothing has classified them yet.
        let prev_front = vec![true; markers.len()];
        Ok(Self {
            markers,
            globe_radius,
            elapsed: 0.0,
            spin: 0.0,
            hover: None,
            prev_front,
            pick_handler: None,
        })
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.hover = hover;
    }

    /// Register the single outward pick callback.
    pub fn set_pick_handler(&mut self, handler: PickHandler) {
        self.pick_handler = Some(handler);
    }

    /// Advance the globe clock: auto-rotation plus the per-icon bob phase.
    pub fn advance(&mut self, dt_sec: f32) {
        self.elapsed += dt_sec;
        self.spin = (self.spin + SPIN_SPEED * dt_sec) % TAU;
    }

    /// Current world-space position of marker `index`: layout position,
    /// per-icon floating bob, then the globe spin about +Y.
    pub fn world_position(&self, index: usize) -> Vec3 {
        let base = self.markers.markers()[index].position;
        let bob = (FLOAT_SPEED * self.elapsed + FLOAT_PHASE_X * base.x + FLOAT_PHASE_Y * base.y)
            .sin()
            * FLOAT_AMPLITUDE;
        let floated = Vec3::new(base.x, base.y + bob, base.z);
        Quat::from_rotation_y(self.spin) * floated
    }

    /// Compute the frame snapshot for the given viewpoint.
    ///
    /// Visibility is a pure function of `(world_position, viewpoint)`; the
    /// only carried state is the previous classification, reused when the
    /// viewpoint is zero-length and normalization would be undefined.
    pub fn frame(&mut self, viewpoint: Vec3) -> FrameSnapshot {
        let mut out = FrameSnapshot::new();
        for index in 0..self.markers.len() {
            let world = self.world_position(index);
            let front = match is_front_facing(world, viewpoint) {
                Some(front) => {
                    self.prev_front[index] = front;
                    front
                }
                None => self.prev_front[index],
            };
            let marker = &self.markers.markers()[index];
            let mut rgb = Vec3::from(marker.color);
            if self.hover == Some(index) {
                rgb = (rgb * HOVER_BRIGHTEN).min(Vec3::ONE);
            }
            let scale = if marker.selected {
                ICON_SIZE * SELECTED_SCALE_MULTIPLIER
            } else {
                ICON_SIZE
            };
            let opacity = if front { VISIBLE_OPACITY } else { HIDDEN_OPACITY };
            out.push(MarkerFrame {
                slug: marker.slug,
                model: outward_transform(world, scale),
                color: rgb.extend(opacity),
                front_facing: front,
                label_visible: front,
                selected: marker.selected,
                world_position: world,
            });
        }
        out
    }

    /// Which marker a ray hits, if any: nearest icon sphere along the ray,
    /// unless the globe body occludes it first. Does not change selection.
    pub fn hit_test(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for index in 0..self.markers.len() {
            let world = self.world_position(index);
            if let Some(t) = ray_sphere(ray_origin, ray_dir, world, PICK_SPHERE_RADIUS) {
                if best.map_or(true, |(_, best_t)| t < best_t) {
                    best = Some((index, t));
                }
            }
        }
        let (index, t) = best?;
        if let Some(globe_t) = ray_sphere(ray_origin, ray_dir, Vec3::ZERO, self.globe_radius) {
            if globe_t < t {
                return None;
            }
        }
        Some(index)
    }

    /// Resolve a pick ray: select the hit marker and fire the pick
    /// callback once with its slug. Returns the slug on a hit.
    pub fn pick(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> Option<&'static str> {
        let index = self.hit_test(ray_origin, ray_dir)?;
        self.markers.select_only(index);
        let slug = self.markers.markers()[index].slug;
        log::debug!("picked marker {slug}");
        if let Some(handler) = self.pick_handler.as_mut() {
            handler(slug);
        }
        Some(slug)
    }

    /// Convenience for front-ends: pick from pixel coordinates.
    pub fn pick_at(
        &mut self,
        camera: &Camera,
        width: f32,
        height: f32,
        sx: f32,
        sy: f32,
    ) -> Option<&'static str> {
        let (origin, dir) = screen_to_world_ray(camera, width, height, sx, sy);
        self.pick(origin, dir)
    }

    /// Programmatic selection by slug; does not fire the pick callback.
    pub fn select(&mut self, slug: &str) -> bool {
        self.markers.select_slug(slug)
    }

    pub fn clear_selection(&mut self) {
        self.markers.clear_selection();
    }

    pub fn selected(&self) -> Option<&Marker> {
        self.markers.selected()
    }
}
