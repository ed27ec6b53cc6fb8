//! Math behind the scroll-driven demo: background starfield scatter, the
//! scroll-locked camera, cursor parallax smoothing, and the rotation kick
//! fired when a new page section scrolls into view.

use crate::rng::RandomSource;

/// Tunables for the scroll demo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParams {
    /// Vertical spacing between the showcased objects, world units.
    pub object_distance: f32,
    /// Idle rotation speed per axis, radians per second.
    pub rotation_speed: [f32; 3],
    /// Background star count.
    pub star_count: u32,
    /// Background star point size.
    pub star_size: f32,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            object_distance: 4.0,
            rotation_speed: [0.1, 0.12, 0.0],
            star_count: 2000,
            star_size: 0.03,
        }
    }
}

/// Scatter background stars in a tall box around the scrolled sections:
/// x and z spread across +-5 units, y biased downward across the full
/// scrolled depth (`object_distance` squared).
pub fn scatter(params: &ScrollParams, rng: &mut impl RandomSource) -> Vec<f32> {
    let count = params.star_count as usize;
    let depth = params.object_distance * params.object_distance;
    let mut positions = vec![0.0f32; count * 3];
    for i in 0..count {
        positions[3 * i] = (rng.next() - 0.5) * 10.0;
        positions[3 * i + 1] = (rng.next() - 0.75) * depth;
        positions[3 * i + 2] = (rng.next() - 0.5) * 10.0;
    }
    positions
}

/// Index of the section nearest the current scroll position.
pub fn section_for(scroll_y: f32, viewport_h: f32) -> usize {
    (scroll_y / viewport_h).round().max(0.0) as usize
}

/// Camera height locked to scroll: one `object_distance` per viewport.
pub fn camera_y(scroll_y: f32, viewport_h: f32, object_distance: f32) -> f32 {
    -scroll_y / viewport_h * object_distance
}

/// Exponential follow toward a moving target, one step per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parallax {
    pub x: f32,
    pub y: f32,
}

impl Parallax {
    /// Move a fixed fraction of the remaining distance toward the cursor
    /// target. The cursor is given in [-0.5, 0.5] viewport coordinates; the
    /// y axis is inverted so the group leans away from the pointer.
    pub fn update(&mut self, cursor_x: f32, cursor_y: f32, ease: f32) {
        self.x += (cursor_x - self.x) * ease;
        self.y += (-cursor_y - self.y) * ease;
    }
}

/// Quadratic ease-in-out over [0, 1].
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// One-shot rotation kick (+6 rad x, +3 rad y over 1.5 s) applied to an
/// object when its section scrolls into view. Yields a cumulative eased
/// delta so it composes with the idle rotation running underneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinTween {
    elapsed: f32,
}

impl SpinTween {
    pub const DURATION: f32 = 1.5;
    pub const DELTA_X: f32 = 6.0;
    pub const DELTA_Y: f32 = 3.0;

    pub fn start() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advance by `dt` seconds and return the eased (x, y) delta so far.
    pub fn step(&mut self, dt: f32) -> (f32, f32) {
        self.elapsed += dt;
        let t = ease_in_out_quad(self.elapsed / Self::DURATION);
        (Self::DELTA_X * t, Self::DELTA_Y * t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= Self::DURATION
    }
}

/// Idle rotation of a showcased object, integrated every frame and
/// overridden while a section-change tween is running.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ObjectRotation {
    pub fn integrate(&mut self, speed: [f32; 3], dt: f32) {
        self.x += speed[0] * dt;
        self.y += speed[1] * dt;
        self.z += speed[2] * dt;
    }
}
