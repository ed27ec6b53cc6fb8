//! Procedural galaxy particle-field generator.
//!
//! Pure function from a parameter snapshot and a random source to flat
//! attribute buffers. Two variants exist:
//!
//! - [`generate`] bakes spin and random offsets straight into positions and
//!   is drawn with a plain point-sprite material; the render loop rotates the
//!   whole field.
//! - [`generate_animated`] leaves positions on their branch rays (y = 0) and
//!   emits the random offsets and per-particle sizes as separate attributes,
//!   so the vertex stage can apply differential rotation per frame and add
//!   the offset afterwards.
//!
//! Both sample radius uniformly in [0, radius] — denser near the center —
//! and assign particles to arms round-robin by index.

use std::f32::consts::TAU;

use crate::params::{GalaxyParams, ParamError};
use crate::rng::RandomSource;

/// Flat per-particle attribute buffers for one generation. All arrays are
/// index-aligned and rebuilt together; a field is never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    /// Stride-3 xyz positions, `3 * count` entries.
    pub positions: Vec<f32>,
    /// Stride-3 rgb colors, `3 * count` entries.
    pub colors: Vec<f32>,
    /// Per-particle point sizes (animated variant only), `count` entries.
    pub scales: Vec<f32>,
    /// Stride-3 xyz random offsets (animated variant only), applied in the
    /// vertex stage after rotation.
    pub randomness: Vec<f32>,
}

impl ParticleField {
    /// Number of particles described by this field.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Angle of arm `i % branches`, arms spaced evenly around the circle.
fn branch_angle(i: u32, branches: u32) -> f32 {
    (i % branches) as f32 / branches as f32 * TAU
}

/// One axis of random offset: a uniform draw raised to `random_pow` (so
/// powers above 1 hug the arm), a fair sign draw, scaled by the particle's
/// own radius so arms fray proportionally farther out. Magnitude is drawn
/// before sign, and callers draw x, y, z in that order.
fn axis_offset(rng: &mut impl RandomSource, params: &GalaxyParams, radius: f32) -> f32 {
    let magnitude = rng.next().powf(params.random_pow);
    let sign = if rng.next() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * params.randomness * radius
}

/// Generate the static-spin variant: offsets and spin baked into positions.
pub fn generate(
    params: &GalaxyParams,
    rng: &mut impl RandomSource,
) -> Result<ParticleField, ParamError> {
    params.validate()?;

    let count = params.count as usize;
    let mut positions = vec![0.0f32; count * 3];
    let mut colors = vec![0.0f32; count * 3];

    for i in 0..params.count {
        let i3 = i as usize * 3;

        let radius = rng.next() * params.radius;
        let angle = branch_angle(i, params.branches) + radius * params.spin;

        let rx = axis_offset(rng, params, radius);
        let ry = axis_offset(rng, params, radius);
        let rz = axis_offset(rng, params, radius);

        positions[i3] = angle.cos() * radius + rx;
        positions[i3 + 1] = ry;
        positions[i3 + 2] = angle.sin() * radius + rz;

        let mixed = params
            .inner_color
            .lerp(params.outer_color, radius / params.radius);
        colors[i3] = mixed.r;
        colors[i3 + 1] = mixed.g;
        colors[i3 + 2] = mixed.b;
    }

    Ok(ParticleField {
        positions,
        colors,
        scales: Vec::new(),
        randomness: Vec::new(),
    })
}

/// Generate the shader-animated variant: positions sit on their branch rays
/// at y = 0, and the offsets plus per-particle sizes travel as separate
/// attributes so the vertex stage can reproduce the same placement at any
/// time value (identical to the static layout at time = 0, spin = 0).
pub fn generate_animated(
    params: &GalaxyParams,
    pixel_ratio: f32,
    rng: &mut impl RandomSource,
) -> Result<ParticleField, ParamError> {
    params.validate()?;

    let count = params.count as usize;
    let mut positions = vec![0.0f32; count * 3];
    let mut colors = vec![0.0f32; count * 3];
    let mut scales = vec![0.0f32; count];
    let mut randomness = vec![0.0f32; count * 3];

    for i in 0..params.count {
        let i3 = i as usize * 3;

        scales[i as usize] = rng.next() * params.size * pixel_ratio;

        let radius = rng.next() * params.radius;
        let angle = branch_angle(i, params.branches);

        positions[i3] = angle.cos() * radius;
        positions[i3 + 1] = 0.0;
        positions[i3 + 2] = angle.sin() * radius;

        randomness[i3] = axis_offset(rng, params, radius);
        randomness[i3 + 1] = axis_offset(rng, params, radius);
        randomness[i3 + 2] = axis_offset(rng, params, radius);

        let mixed = params
            .inner_color
            .lerp(params.outer_color, radius / params.radius);
        colors[i3] = mixed.r;
        colors[i3 + 1] = mixed.g;
        colors[i3 + 2] = mixed.b;
    }

    Ok(ParticleField {
        positions,
        colors,
        scales,
        randomness,
    })
}

/// Model-space rotation the animated vertex stage applies at time `t`:
/// angular velocity inversely proportional to orbital radius, so inner
/// particles revolve faster (differential rotation).
pub fn swirl_angle(radius: f32, time: f32, speed: f32) -> f32 {
    (1.0 / radius) * time * speed
}
