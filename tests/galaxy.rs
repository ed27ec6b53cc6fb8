#![cfg(not(target_arch = "wasm32"))]

use std::f32::consts::TAU;

use galaxy_wasm::color::Rgb;
use galaxy_wasm::galaxy::{generate, generate_animated, swirl_angle};
use galaxy_wasm::params::{GalaxyParams, ParamError};
use galaxy_wasm::rng::SeededRng;

fn small_params() -> GalaxyParams {
    GalaxyParams {
        count: 3000,
        ..GalaxyParams::default()
    }
}

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn arrays_are_count_length_and_aligned() {
    let params = small_params();
    let field = generate(&params, &mut SeededRng::from_seed(1)).unwrap();
    assert_eq!(field.len(), 3000);
    assert_eq!(field.positions.len(), 3000 * 3);
    assert_eq!(field.colors.len(), 3000 * 3);
    assert!(field.scales.is_empty());
    assert!(field.randomness.is_empty());

    let field = generate_animated(&params, 2.0, &mut SeededRng::from_seed(1)).unwrap();
    assert_eq!(field.positions.len(), 3000 * 3);
    assert_eq!(field.colors.len(), 3000 * 3);
    assert_eq!(field.scales.len(), 3000);
    assert_eq!(field.randomness.len(), 3000 * 3);
}

#[test]
fn zero_randomness_places_particles_exactly_on_arms() {
    let params = GalaxyParams {
        count: 500,
        randomness: 0.0,
        spin: 0.0,
        branches: 4,
        ..GalaxyParams::default()
    };
    let field = generate(&params, &mut SeededRng::from_seed(7)).unwrap();

    for i in 0..500usize {
        let x = field.positions[3 * i];
        let y = field.positions[3 * i + 1];
        let z = field.positions[3 * i + 2];
        assert_eq!(y, 0.0);

        // Horizontal distance equals the sampled radius, and the angle is
        // one of the four arm angles.
        let r = (x * x + z * z).sqrt();
        assert!(r <= params.radius);
        let expected_angle = (i % 4) as f32 / 4.0 * TAU;
        assert!(
            approx_eq(x, expected_angle.cos() * r, 1e-4),
            "particle {i}: x={x} r={r}"
        );
        assert!(
            approx_eq(z, expected_angle.sin() * r, 1e-4),
            "particle {i}: z={z} r={r}"
        );
    }
}

#[test]
fn branch_assignment_is_round_robin() {
    let params = GalaxyParams {
        count: 90,
        branches: 5,
        randomness: 0.0,
        spin: 0.0,
        ..GalaxyParams::default()
    };
    let field = generate(&params, &mut SeededRng::from_seed(11)).unwrap();

    // i and i + branches lie on the same ray: identical position angle.
    for i in 0..(90 - 5) as usize {
        let angle_of = |j: usize| {
            let x = field.positions[3 * j];
            let z = field.positions[3 * j + 2];
            z.atan2(x)
        };
        let a = angle_of(i);
        let b = angle_of(i + 5);
        let diff = (a - b).rem_euclid(TAU);
        assert!(
            diff < 1e-4 || diff > TAU - 1e-4,
            "particles {i} and {} diverge: {a} vs {b}",
            i + 5
        );
    }
}

#[test]
fn color_interpolation_is_monotonic_in_radius() {
    // With zero randomness the horizontal distance is exactly the sampled
    // radius, so color distance to the inner stop must grow with it.
    let params = GalaxyParams {
        count: 2000,
        randomness: 0.0,
        ..GalaxyParams::default()
    };
    let field = generate(&params, &mut SeededRng::from_seed(3)).unwrap();
    let inner = params.inner_color;

    let mut by_radius: Vec<(f32, Rgb)> = (0..field.len())
        .map(|i| {
            let x = field.positions[3 * i];
            let z = field.positions[3 * i + 2];
            let color = Rgb::new(
                field.colors[3 * i],
                field.colors[3 * i + 1],
                field.colors[3 * i + 2],
            );
            ((x * x + z * z).sqrt(), color)
        })
        .collect();
    by_radius.sort_by(|a, b| a.0.total_cmp(&b.0));

    for pair in by_radius.windows(2) {
        let (r_near, c_near) = pair[0];
        let (r_far, c_far) = pair[1];
        if r_far - r_near < 1e-3 {
            continue; // nearly equal radii can tie under f32 rounding
        }
        assert!(
            c_near.distance(inner) < c_far.distance(inner),
            "color moved back toward inner stop between r={r_near} and r={r_far}"
        );
    }
}

#[test]
fn mix_factor_endpoints() {
    let inner = Rgb::new(1.0, 0.0, 0.0);
    let outer = Rgb::new(0.0, 0.0, 1.0);
    assert_eq!(inner.lerp(outer, 0.0), inner);
    assert_eq!(inner.lerp(outer, 1.0), outer);
    assert_eq!(inner.lerp(outer, 0.5), Rgb::new(0.5, 0.0, 0.5));
}

#[test]
fn identical_seeds_yield_bit_identical_fields() {
    let params = small_params();
    let a = generate(&params, &mut SeededRng::from_seed(42)).unwrap();
    let b = generate(&params, &mut SeededRng::from_seed(42)).unwrap();
    assert_eq!(a, b);

    let a = generate_animated(&params, 1.5, &mut SeededRng::from_seed(42)).unwrap();
    let b = generate_animated(&params, 1.5, &mut SeededRng::from_seed(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let params = small_params();
    let a = generate(&params, &mut SeededRng::from_seed(1)).unwrap();
    let b = generate(&params, &mut SeededRng::from_seed(2)).unwrap();
    assert_ne!(a.positions, b.positions);
}

#[test]
fn six_particles_three_branches_end_to_end() {
    let params = GalaxyParams {
        count: 6,
        branches: 3,
        radius: 10.0,
        randomness: 0.0,
        spin: 0.0,
        ..GalaxyParams::default()
    };
    let field = generate(&params, &mut SeededRng::from_seed(123)).unwrap();

    // Pairs {0,3}, {1,4}, {2,5} share arm angles 0, 2pi/3, 4pi/3.
    for (i, expected) in [(0usize, 0.0f32), (1, TAU / 3.0), (2, 2.0 * TAU / 3.0)] {
        for k in [i, i + 3] {
            let x = field.positions[3 * k];
            let z = field.positions[3 * k + 2];
            let r = (x * x + z * z).sqrt();
            assert!(approx_eq(x, expected.cos() * r, 1e-4));
            assert!(approx_eq(z, expected.sin() * r, 1e-4));
        }
    }

    // Radii of 0 and 3 come from independent draws.
    let r = |k: usize| {
        let x = field.positions[3 * k];
        let z = field.positions[3 * k + 2];
        (x * x + z * z).sqrt()
    };
    assert_ne!(r(0), r(3));
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut rng = SeededRng::from_seed(0);

    let params = GalaxyParams {
        count: 0,
        ..GalaxyParams::default()
    };
    assert_eq!(generate(&params, &mut rng), Err(ParamError::InvalidCount(0)));

    let params = GalaxyParams {
        radius: 0.0,
        ..GalaxyParams::default()
    };
    assert_eq!(
        generate(&params, &mut rng),
        Err(ParamError::InvalidRadius(0.0))
    );

    let params = GalaxyParams {
        branches: 0,
        ..GalaxyParams::default()
    };
    assert_eq!(
        generate_animated(&params, 1.0, &mut rng),
        Err(ParamError::InvalidBranches(0))
    );

    let params = GalaxyParams {
        randomness: -0.1,
        ..GalaxyParams::default()
    };
    assert!(matches!(
        generate(&params, &mut rng),
        Err(ParamError::InvalidRandomness(_))
    ));
}

#[test]
fn animated_variant_keeps_rays_flat_and_scales_bounded() {
    let params = GalaxyParams {
        count: 1000,
        size: 25.0,
        ..GalaxyParams::default()
    };
    let ratio = 2.0;
    let field = generate_animated(&params, ratio, &mut SeededRng::from_seed(5)).unwrap();

    for i in 0..1000usize {
        assert_eq!(field.positions[3 * i + 1], 0.0, "y must stay on the plane");
        let x = field.positions[3 * i];
        let z = field.positions[3 * i + 2];
        assert!((x * x + z * z).sqrt() <= params.radius + 1e-4);
        assert!(field.scales[i] >= 0.0 && field.scales[i] < params.size * ratio);
    }
}

#[test]
fn swirl_is_faster_for_inner_particles() {
    let t = 2.0;
    let speed = 0.2;
    let inner = swirl_angle(0.5, t, speed);
    let mid = swirl_angle(2.0, t, speed);
    let outer = swirl_angle(5.0, t, speed);
    assert!(inner > mid && mid > outer);
    // Linear in time at fixed radius.
    assert!(approx_eq(
        swirl_angle(2.0, 2.0 * t, speed),
        2.0 * mid,
        1e-6
    ));
}

#[test]
fn hex_parsing_round_trips_the_default_stops() {
    assert_eq!(
        Rgb::from_hex("#ff6030").unwrap(),
        GalaxyParams::default().inner_color
    );
    assert_eq!(
        Rgb::from_hex("1b3984").unwrap(),
        GalaxyParams::default().outer_color
    );
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#zzzzzz").is_err());
}
